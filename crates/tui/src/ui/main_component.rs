//! Main view composition: nav bar over page content, drawer on top.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    prelude::*,
    widgets::Paragraph,
};
use topnav_types::{Effect, Msg};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::content::ContentComponent;
use crate::ui::components::drawer::DrawerComponent;
use crate::ui::components::nav_bar::NavBarComponent;
use crate::ui::theme::theme_helpers as th;

/// Composes the widget set into one screen.
///
/// Layout: a three-row nav bar, the page pane, and a one-row hint bar.
/// The drawer renders last over the full frame; while it is open it also
/// receives all key and mouse input (modal-first routing).
#[derive(Debug, Default)]
pub struct MainView {
    nav_bar_view: NavBarComponent,
    content_view: ContentComponent,
    drawer_view: DrawerComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        let mut effects = app.update(msg);
        effects.extend(self.drawer_view.handle_message(app, msg));
        effects.extend(self.nav_bar_view.handle_message(app, msg));
        effects.extend(self.content_view.handle_message(app, msg));
        effects
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.nav_bar.drawer_open {
            return self.drawer_view.handle_key_events(app, key);
        }
        if app.content.container_focus.get() {
            return self.content_view.handle_key_events(app, key);
        }
        self.nav_bar_view.handle_key_events(app, key)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if app.nav_bar.drawer_open {
            return self.drawer_view.handle_mouse_events(app, mouse);
        }
        let mut effects = self.nav_bar_view.handle_mouse_events(app, mouse);
        effects.extend(self.content_view.handle_mouse_events(app, mouse));
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        // Fill the background for consistency across panes.
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let chunks = Layout::vertical([
            Constraint::Length(3), // Nav bar
            Constraint::Min(1),    // Page content
            Constraint::Length(1), // Hints
        ])
        .split(area);

        self.content_view.render(frame, chunks[1], app);

        let hint_spans: Vec<Span> = self.get_hint_spans(app);
        let hints_widget = Paragraph::new(Line::from(hint_spans)).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints_widget, chunks[2]);

        // The bar renders after the page so its panels overlay it; the
        // drawer renders last over everything.
        self.nav_bar_view.render(frame, chunks[0], app);
        self.drawer_view.render(frame, area, app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut hint_spans: Vec<Span> = vec![Span::styled("Hints: ", app.ctx.theme.text_muted_style())];
        if app.nav_bar.drawer_open {
            hint_spans.extend(self.drawer_view.get_hint_spans(app));
        } else if app.content.container_focus.get() {
            hint_spans.extend(self.content_view.get_hint_spans(app));
        } else {
            hint_spans.extend(self.nav_bar_view.get_hint_spans(app));
        }
        hint_spans.extend(th::build_hint_spans(&*app.ctx.theme, &[("q", " Quit")]));
        if let Some(href) = &app.last_navigation {
            hint_spans.push(Span::styled(format!("  → {href}"), app.ctx.theme.accent_primary_style()));
        }
        hint_spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEventKind};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use topnav_types::{NavLink, Sublink};

    use crate::ui::components::common::ScrollTarget;
    use crate::ui::runtime::process_effects;
    use crate::ui::theme;

    fn sample_links() -> Vec<NavLink> {
        vec![
            NavLink::leaf("A", "/a"),
            NavLink::branch("B", vec![Sublink::new("B1", "/b1")]).unwrap(),
        ]
    }

    fn test_app(links: Vec<NavLink>) -> App {
        App::new(links, theme::load(None))
    }

    fn draw(view: &mut MainView, app: &mut App, width: u16, height: u16) {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal
            .draw(|frame| view.render(frame, frame.area(), app))
            .expect("draw");
    }

    fn left_click(view: &mut MainView, app: &mut App, x: u16, y: u16) -> Vec<Effect> {
        view.handle_mouse_events(
            app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: x,
                row: y,
                modifiers: KeyModifiers::empty(),
            },
        )
    }

    #[test]
    fn wide_viewport_renders_one_trigger_per_link() {
        let mut app = test_app(sample_links());
        let mut view = MainView::new();
        draw(&mut view, &mut app, 120, 30);

        assert_eq!(app.nav_bar.trigger_areas.len(), 2);
        assert!(app.nav_bar.hamburger_area.is_none());
        assert!(app.nav_bar.popovers[0].is_inert());
        assert!(!app.nav_bar.popovers[1].is_inert());
    }

    #[test]
    fn narrow_viewport_renders_only_the_hamburger() {
        for count in [0usize, 1, 10] {
            let links: Vec<NavLink> = (0..count)
                .map(|i| NavLink::leaf(format!("L{i}"), format!("/l{i}")))
                .collect();
            let mut app = test_app(links);
            let mut view = MainView::new();
            draw(&mut view, &mut app, 80, 24);

            assert!(app.nav_bar.trigger_areas.is_empty());
            assert!(app.nav_bar.hamburger_area.is_some());
        }
    }

    #[test]
    fn trigger_click_toggles_popover_and_outside_click_closes_it() {
        let mut app = test_app(sample_links());
        let mut view = MainView::new();
        draw(&mut view, &mut app, 120, 30);

        let trigger = app.nav_bar.trigger_areas[1];
        let effects = left_click(&mut view, &mut app, trigger.x + 1, trigger.y + 1);
        assert!(effects.is_empty());
        assert!(app.nav_bar.popovers[1].is_open());

        // Click far away from trigger and panel.
        draw(&mut view, &mut app, 120, 30);
        left_click(&mut view, &mut app, 5, 20);
        assert!(!app.nav_bar.popovers[1].is_open());
    }

    #[test]
    fn leaf_click_navigates_without_open_state() {
        let mut app = test_app(sample_links());
        let mut view = MainView::new();
        draw(&mut view, &mut app, 120, 30);

        let trigger = app.nav_bar.trigger_areas[0];
        let effects = left_click(&mut view, &mut app, trigger.x + 1, trigger.y + 1);
        assert_eq!(effects, vec![Effect::Navigate("/a".into())]);
        assert!(!app.nav_bar.popovers[0].is_open());
    }

    #[test]
    fn drawer_round_trip_locks_and_unlocks_body_once() {
        let mut app = test_app(sample_links());
        let mut view = MainView::new();
        draw(&mut view, &mut app, 80, 24);

        // Open via the hamburger.
        let hamburger = app.nav_bar.hamburger_area.expect("narrow viewport");
        let effects = left_click(&mut view, &mut app, hamburger.x + 1, hamburger.y + 1);
        assert_eq!(effects, vec![Effect::OpenDrawer]);
        process_effects(&mut app, effects);
        assert!(app.nav_bar.drawer_open);

        // The lock engages on the next message pass, exactly once, no
        // matter how many passes observe the unchanged flag.
        view.handle_message(&mut app, &Msg::Tick);
        assert_eq!(app.scroll_lock.lock_count(ScrollTarget::Body), 1);
        view.handle_message(&mut app, &Msg::Tick);
        view.handle_message(&mut app, &Msg::Tick);
        assert_eq!(app.scroll_lock.lock_count(ScrollTarget::Body), 1);

        // Scroll input is ignored while locked.
        draw(&mut view, &mut app, 80, 24);
        let before = app.content.metrics;
        let scroll_column = app.content.last_area.x + 2;
        let scroll_row = app.content.last_area.y + 2;
        view.content_view.handle_mouse_events(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: scroll_column,
                row: scroll_row,
                modifiers: KeyModifiers::empty(),
            },
        );
        assert_eq!(app.content.metrics, before);

        // Close via the drawer's close glyph.
        let close = app.drawer.close_area;
        let effects = left_click(&mut view, &mut app, close.x + 1, close.y);
        assert_eq!(effects, vec![Effect::CloseDrawer]);
        process_effects(&mut app, effects);
        assert!(!app.nav_bar.drawer_open);

        view.handle_message(&mut app, &Msg::Tick);
        assert_eq!(app.scroll_lock.lock_count(ScrollTarget::Body), 0);
        assert!(!app.scroll_lock.is_locked(ScrollTarget::Body));
    }

    #[test]
    fn panel_row_click_navigates_and_closes() {
        let mut app = test_app(sample_links());
        let mut view = MainView::new();
        draw(&mut view, &mut app, 120, 30);

        let trigger = app.nav_bar.trigger_areas[1];
        left_click(&mut view, &mut app, trigger.x + 1, trigger.y + 1);
        // Let the reveal finish, then render so the panel records areas.
        view.handle_message(&mut app, &Msg::Tick);
        view.handle_message(&mut app, &Msg::Tick);
        draw(&mut view, &mut app, 120, 30);

        let row = app.nav_bar.popovers[1].row_areas[0];
        let effects = left_click(&mut view, &mut app, row.x + 1, row.y);
        assert_eq!(effects, vec![Effect::Navigate("/b1".into())]);
        assert!(!app.nav_bar.popovers[1].is_open());
    }

    #[test]
    fn resize_to_narrow_closes_open_panels() {
        let mut app = test_app(sample_links());
        let mut view = MainView::new();
        draw(&mut view, &mut app, 120, 30);

        let trigger = app.nav_bar.trigger_areas[1];
        left_click(&mut view, &mut app, trigger.x + 1, trigger.y + 1);
        assert!(app.nav_bar.popovers[1].is_open());

        view.handle_message(&mut app, &Msg::Resize(80, 24));
        assert!(!app.nav_bar.popovers[1].is_open());
    }
}
