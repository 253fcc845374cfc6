use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};
use topnav_types::{Effect, Msg};

use super::state::drawer_rows;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

/// Close glyph rendered in the panel's top-right corner.
const CLOSE_GLYPH: &str = "✕";

/// Full-viewport drawer overlay.
///
/// Visibility is owned by the nav bar; this component reacts to the flag,
/// slides the panel in and out, and reports close requests as effects. The
/// scroll-lock side effect fires on flag edges during message handling,
/// never inside the event that flipped the flag.
#[derive(Debug, Default)]
pub struct DrawerComponent;

impl Component for DrawerComponent {
    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        app.sync_drawer_scroll_lock();
        if let Msg::Tick = msg {
            let open = app.nav_bar.drawer_open;
            app.drawer.tick(open);
        }
        Vec::new()
    }

    /// Key handling while the drawer is open.
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let rows = drawer_rows(&app.nav_bar.links);
        match key.code {
            KeyCode::Esc => return vec![Effect::CloseDrawer],
            KeyCode::Down if !rows.is_empty() => {
                app.drawer.selected_row = (app.drawer.selected_row + 1) % rows.len();
            }
            KeyCode::Up if !rows.is_empty() => {
                app.drawer.selected_row = (app.drawer.selected_row + rows.len() - 1) % rows.len();
            }
            KeyCode::Enter => {
                if let Some(href) = rows.get(app.drawer.selected_row).and_then(|row| row.href.clone()) {
                    return vec![Effect::Navigate(href), Effect::CloseDrawer];
                }
            }
            _ => {}
        }
        Vec::new()
    }

    /// Mouse handling while the drawer is open.
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let MouseEvent { kind, column, row, .. } = mouse;
        if kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let position = Position::new(column, row);
        if app.drawer.close_area.contains(position) {
            return vec![Effect::CloseDrawer];
        }
        if let Some(row_idx) = app.drawer.row_areas.iter().position(|area| area.contains(position)) {
            app.drawer.selected_row = row_idx;
            let rows = drawer_rows(&app.nav_bar.links);
            if let Some(href) = rows.get(row_idx).and_then(|row| row.href.clone()) {
                return vec![Effect::Navigate(href), Effect::CloseDrawer];
            }
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let open = app.nav_bar.drawer_open;
        app.drawer.resize(area.width);
        if !app.drawer.is_visible(open) {
            app.drawer.close_area = Rect::default();
            app.drawer.row_areas.clear();
            return;
        }

        let theme = &*app.ctx.theme;
        // Dim the page behind the panel.
        frame.render_widget(Block::default().style(theme.modal_background_style()).dim(), area);

        let progress = app.drawer.progress().min(area.width);
        let panel = Rect::new(area.x + area.width - progress, area.y, progress, area.height);
        frame.render_widget(Clear, panel);
        let block = th::block(theme, None, false);
        let inner = block.inner(panel);
        frame.render_widget(block, panel);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let close_area = Rect::new(inner.x + inner.width.saturating_sub(3), inner.y, 3, 1);
        frame.render_widget(
            Paragraph::new(CLOSE_GLYPH).centered().style(theme.accent_primary_style()),
            close_area,
        );

        let rows = drawer_rows(&app.nav_bar.links);
        let mut row_areas = Vec::with_capacity(rows.len());
        let top = inner.y + 2;
        let mut lines: Vec<Line> = Vec::new();
        for (idx, row) in rows.iter().enumerate() {
            let y = top + idx as u16;
            // Rows clipped by the panel keep an empty hit area.
            if y < inner.bottom() {
                row_areas.push(Rect::new(inner.x, y, inner.width, 1));
            } else {
                row_areas.push(Rect::default());
            }
            let text = if row.indented {
                format!("  {}", row.label)
            } else {
                row.label.clone()
            };
            let style = match (&row.href, idx == app.drawer.selected_row) {
                (Some(_), true) => theme.selection_style().add_modifier(Modifier::BOLD),
                (Some(_), false) => theme.text_primary_style(),
                (None, _) => theme.text_secondary_style().add_modifier(Modifier::BOLD),
            };
            lines.push(Line::styled(text, style));
        }
        let list_area = Rect::new(inner.x, top, inner.width, inner.height.saturating_sub(2));
        frame.render_widget(Paragraph::new(lines).style(th::panel_style(theme)), list_area);

        app.drawer.close_area = close_area;
        app.drawer.row_areas = row_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[("↑/↓", " Rows  "), ("Enter", " Follow  "), ("Esc", " Close ")],
        )
    }
}
