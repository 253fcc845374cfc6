use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use topnav_types::Effect;

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::common::ScrollTarget;
use crate::ui::theme::theme_helpers as th;

/// The scrollable page pane behind the navigation bar.
///
/// Scroll input is applied only while the body is not scroll-locked; while
/// the drawer is open the pane ignores wheel and key scrolling entirely.
#[derive(Debug, Default)]
pub struct ContentComponent;

impl Component for ContentComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Tab => {
                app.focus.next();
                app.nav_bar.close_unfocused_popovers();
            }
            KeyCode::BackTab => {
                app.focus.prev();
                app.nav_bar.close_unfocused_popovers();
            }
            _ if app.scroll_lock.is_locked(ScrollTarget::Body) => {}
            KeyCode::Up => app.content.metrics.scroll_lines(-1),
            KeyCode::Down => app.content.metrics.scroll_lines(1),
            KeyCode::PageUp => app.content.metrics.scroll_pages(-1),
            KeyCode::PageDown => app.content.metrics.scroll_pages(1),
            KeyCode::Home => app.content.metrics.scroll_to_top(),
            KeyCode::End => app.content.metrics.scroll_to_bottom(),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let MouseEvent { kind, column, row, .. } = mouse;
        let position = Position::new(column, row);
        if !app.content.last_area.contains(position) || app.nav_bar.position_in_popover(position) {
            return Vec::new();
        }

        match kind {
            MouseEventKind::ScrollUp if !app.scroll_lock.is_locked(ScrollTarget::Body) => {
                app.content.metrics.scroll_lines(-3);
            }
            MouseEventKind::ScrollDown if !app.scroll_lock.is_locked(ScrollTarget::Body) => {
                app.content.metrics.scroll_lines(3);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                app.focus.focus(&app.content.container_focus);
                app.nav_bar.close_unfocused_popovers();
            }
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let focused = app.content.container_focus.get();
        let block = th::block(theme, Some("Page"), focused);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        app.content.metrics.update_viewport_height(inner.height);
        app.content.metrics.update_content_height(app.content.line_count());

        let lines: Vec<Line> = app
            .content
            .lines()
            .iter()
            .map(|line| Line::from(line.as_str()))
            .collect();
        let paragraph = Paragraph::new(lines)
            .style(theme.text_primary_style())
            .scroll((app.content.metrics.offset(), 0));
        frame.render_widget(paragraph, inner);

        app.content.last_area = rect;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[("↑/↓ PgUp/PgDn", " Scroll  "), ("Tab", " Focus nav ")],
        )
    }
}
