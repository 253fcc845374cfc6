use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Borders, Clear, Paragraph},
};
use topnav_types::{Effect, Msg, NavLink, Sublink};
use unicode_width::UnicodeWidthStr;

use super::NavBarState;
use crate::app::App;
use crate::ui::components::{Component, find_target_index_by_mouse_position};
use crate::ui::theme::theme_helpers as th;

/// Chevron shown on branch triggers, pointing at the panel state.
const CHEVRON_CLOSED: &str = "▾";
const CHEVRON_OPEN: &str = "▴";
/// Hamburger glyph for the narrow-viewport trigger.
const HAMBURGER: &str = "≡";

/// The responsive top navigation bar.
///
/// Wide viewports render one trigger per link, branch triggers opening
/// their popover panel underneath. Narrow viewports collapse to a single
/// hamburger trigger that opens the drawer.
#[derive(Debug, Default)]
pub struct NavBarComponent;

impl NavBarComponent {
    /// Text rendered on a trigger, chevron included for branches.
    fn trigger_label(link: &NavLink, open: bool) -> String {
        if link.is_branch() {
            let chevron = if open { CHEVRON_OPEN } else { CHEVRON_CLOSED };
            format!("{} {chevron}", link.label())
        } else {
            link.label().to_string()
        }
    }

    fn navigate_to(sublink: &Sublink) -> Effect {
        Effect::Navigate(sublink.href.clone().unwrap_or_else(|| "#".into()))
    }

    /// Renders one popover panel anchored under its trigger.
    fn render_panel(frame: &mut Frame, app: &mut App, idx: usize) {
        let theme = &*app.ctx.theme;
        let sublinks = app.nav_bar.links[idx].sublinks();
        let popover = &app.nav_bar.popovers[idx];
        let revealed = popover.revealed_rows();
        if revealed == 0 {
            return;
        }

        let frame_area = frame.area();
        let trigger = popover.trigger_area;

        // Panel width fits the widest row plus borders and padding.
        let mut width = "Start integrating products and tools".width() as u16;
        for sublink in sublinks {
            width = width.max(Self::row_text(sublink).width() as u16);
            if let Some(description) = &sublink.description {
                width = width.max(description.width() as u16 + 2);
            }
        }
        let width = (width + 4).min(frame_area.width);

        let x = (trigger.x + trigger.width / 2)
            .saturating_sub(width / 2)
            .min(frame_area.width.saturating_sub(width));
        let y = trigger.y + trigger.height;
        let height = revealed.min(frame_area.height.saturating_sub(y));
        if height == 0 {
            return;
        }
        let panel = Rect::new(x, y, width, height);

        frame.render_widget(Clear, panel);
        let block = th::block(theme, None, false);
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let focused_here = app.nav_bar.item_focus_flags[idx].get();
        let mut lines: Vec<Line> = Vec::new();
        let mut row_areas: Vec<Rect> = Vec::new();
        for (row_idx, sublink) in sublinks.iter().enumerate() {
            let selected = focused_here && popover.selected_row == row_idx;
            let style = if selected {
                theme.selection_style().add_modifier(Modifier::BOLD)
            } else {
                theme.text_primary_style()
            };
            let row_y = inner.y + lines.len() as u16;
            lines.push(Line::styled(Self::row_text(sublink), style));
            let mut row_height = 1;
            if let Some(description) = &sublink.description {
                lines.push(Line::styled(format!("  {description}"), theme.text_muted_style()));
                row_height = 2;
            }
            row_areas.push(Rect::new(inner.x, row_y, inner.width, row_height));
        }
        // Footer on its own muted surface, like the original panel.
        let footer_bg = theme.roles().surface_muted;
        lines.push(Line::styled(
            "Documentation",
            theme.text_secondary_style().add_modifier(Modifier::BOLD).bg(footer_bg),
        ));
        lines.push(Line::styled(
            "Start integrating products and tools",
            theme.text_muted_style().bg(footer_bg),
        ));

        frame.render_widget(Paragraph::new(lines).style(th::panel_style(theme)), inner);

        let popover = &mut app.nav_bar.popovers[idx];
        popover.panel_area = panel;
        popover.row_areas = row_areas;
    }

    fn row_text(sublink: &Sublink) -> String {
        match &sublink.icon {
            Some(icon) => format!("{icon} {}", sublink.label),
            None => sublink.label.clone(),
        }
    }
}

impl Component for NavBarComponent {
    /// Keyboard navigation across triggers and inside open panels.
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        let narrow = NavBarState::is_narrow(app.nav_bar.last_area.width);
        match key.code {
            KeyCode::Tab => {
                app.focus.next();
                app.nav_bar.close_unfocused_popovers();
            }
            KeyCode::BackTab => {
                app.focus.prev();
                app.nav_bar.close_unfocused_popovers();
            }
            KeyCode::Left => {
                if let Some(flag) = app.nav_bar.cycle_focus(false) {
                    app.focus.focus(&flag);
                }
                app.nav_bar.close_unfocused_popovers();
            }
            KeyCode::Right => {
                if let Some(flag) = app.nav_bar.cycle_focus(true) {
                    app.focus.focus(&flag);
                }
                app.nav_bar.close_unfocused_popovers();
            }
            KeyCode::Down | KeyCode::Up => {
                if let Some(idx) = app.nav_bar.focused_item() {
                    let rows = app.nav_bar.links[idx].sublinks().len();
                    let popover = &mut app.nav_bar.popovers[idx];
                    if popover.is_open() {
                        if key.code == KeyCode::Down {
                            popover.select_next(rows);
                        } else {
                            popover.select_prev(rows);
                        }
                    }
                }
            }
            KeyCode::Enter => {
                if narrow {
                    effects.push(Effect::OpenDrawer);
                } else if let Some(idx) = app.nav_bar.focused_item() {
                    match &app.nav_bar.links[idx] {
                        NavLink::Leaf { href, .. } => effects.push(Effect::Navigate(href.clone())),
                        NavLink::Branch { sublinks, .. } => {
                            let popover = &mut app.nav_bar.popovers[idx];
                            if popover.is_open() {
                                let row = popover.selected_row.min(sublinks.len() - 1);
                                effects.push(Self::navigate_to(&sublinks[row]));
                                popover.close();
                            } else {
                                popover.toggle();
                            }
                        }
                    }
                }
            }
            KeyCode::Esc => {
                if let Some(idx) = app.nav_bar.focused_item() {
                    app.nav_bar.popovers[idx].on_escape();
                }
            }
            _ => {}
        }
        effects
    }

    /// Mouse interaction: panel rows, the hamburger, triggers, and
    /// outside-click dismissal, in that order.
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let MouseEvent { kind, column, row, .. } = mouse;
        if kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let position = Position::new(column, row);
        let mut effects = Vec::new();

        // A click inside an open panel activates its row and never falls
        // through to the bar underneath.
        for idx in 0..app.nav_bar.popovers.len() {
            let popover = &app.nav_bar.popovers[idx];
            if popover.is_open() && popover.panel_area.contains(position) {
                if let Some(row_idx) = popover.row_areas.iter().position(|area| area.contains(position))
                    && let Some(sublink) = app.nav_bar.links[idx].sublinks().get(row_idx)
                {
                    effects.push(Self::navigate_to(sublink));
                    app.nav_bar.popovers[idx].close();
                }
                return effects;
            }
        }

        if app.nav_bar.hamburger_area.is_some_and(|area| area.contains(position)) {
            effects.push(Effect::OpenDrawer);
            return effects;
        }

        let clicked_trigger = find_target_index_by_mouse_position(
            &app.nav_bar.last_area,
            &app.nav_bar.trigger_areas,
            column,
            row,
        );

        // Every open popover applies its own outside-click dismissal; the
        // one whose trigger was clicked is left to the toggle below.
        for popover in &mut app.nav_bar.popovers {
            popover.dismiss_if_outside(position);
        }

        if let Some(idx) = clicked_trigger {
            if let Some(flag) = app.nav_bar.item_focus_flags.get(idx) {
                app.focus.focus(flag);
            }
            match &app.nav_bar.links[idx] {
                NavLink::Leaf { href, .. } => effects.push(Effect::Navigate(href.clone())),
                NavLink::Branch { .. } => app.nav_bar.popovers[idx].toggle(),
            }
        }
        effects
    }

    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        if let Msg::Tick = msg {
            for popover in &mut app.nav_bar.popovers {
                popover.tick();
            }
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        app.nav_bar.last_area = area;

        if NavBarState::is_narrow(area.width) {
            app.nav_bar.trigger_areas.clear();
            let trigger = Rect::new(
                area.x + area.width.saturating_sub(7),
                area.y,
                7.min(area.width),
                area.height.min(3),
            );
            th::render_button(
                frame,
                trigger,
                HAMBURGER,
                app.nav_bar.container_focus.get(),
                false,
                theme,
                Borders::ALL,
            );
            app.nav_bar.hamburger_area = Some(trigger);
            return;
        }
        app.nav_bar.hamburger_area = None;

        // Centered row of triggers sized to their labels.
        let labels: Vec<String> = app
            .nav_bar
            .links
            .iter()
            .enumerate()
            .map(|(idx, link)| Self::trigger_label(link, app.nav_bar.popovers[idx].is_open()))
            .collect();
        let mut constraints = Vec::with_capacity(labels.len() + 2);
        constraints.push(Constraint::Fill(1));
        for label in &labels {
            constraints.push(Constraint::Length(label.width() as u16 + 4));
        }
        constraints.push(Constraint::Fill(1));
        let chunks = Layout::horizontal(constraints).split(area);
        let trigger_areas: Vec<Rect> = chunks[1..chunks.len() - 1].to_vec();

        for (idx, label) in labels.iter().enumerate() {
            let focused = app.nav_bar.item_focus_flags[idx].get();
            let open = app.nav_bar.popovers[idx].is_open();
            let borders = if focused { Borders::ALL } else { Borders::NONE };
            th::render_button(frame, trigger_areas[idx], label, focused, open, theme, borders);
            app.nav_bar.popovers[idx].trigger_area = trigger_areas[idx];
        }
        app.nav_bar.trigger_areas = trigger_areas;

        // Panels render after the row so they overlay the page below.
        for idx in 0..app.nav_bar.popovers.len() {
            if app.nav_bar.popovers[idx].revealed_rows() > 0 {
                Self::render_panel(frame, app, idx);
            }
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        if NavBarState::is_narrow(app.nav_bar.last_area.width) {
            return th::build_hint_spans(&*app.ctx.theme, &[("Enter", " Menu ")]);
        }
        th::build_hint_spans(
            &*app.ctx.theme,
            &[
                ("←/→", " Items  "),
                ("Enter", " Open/Follow  "),
                ("Esc", " Close menu "),
            ],
        )
    }
}
