use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::ui::components::common::ScrollMetrics;

/// State for the page content pane.
///
/// Owns the pane's scroll metrics (captured and restored by the scroll
/// lock around drawer visibility) and its focus flag.
#[derive(Debug)]
pub struct ContentState {
    /// Current scroll position and measured dimensions.
    pub metrics: ScrollMetrics,
    /// Focus flag for the pane in the global focus tree.
    pub container_focus: FocusFlag,
    /// Last rendered area; used for mouse hit testing.
    pub last_area: Rect,
    lines: Vec<String>,
}

impl ContentState {
    /// Creates the pane with the built-in placeholder page.
    pub fn new() -> Self {
        Self {
            metrics: ScrollMetrics::default(),
            container_focus: FocusFlag::named("content.page"),
            last_area: Rect::default(),
            lines: sample_page(),
        }
    }

    /// Returns the page lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the page height in rows.
    pub fn line_count(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }
}

impl Default for ContentState {
    fn default() -> Self {
        Self::new()
    }
}

impl HasFocus for ContentState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

/// Deterministic placeholder page, long enough to scroll in any terminal.
fn sample_page() -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Welcome".to_string());
    lines.push(String::new());
    lines.push("This page stands in for whatever the navigation leads to.".to_string());
    lines.push("Scroll it with the mouse wheel or PageUp/PageDown, then open".to_string());
    lines.push("the drawer on a narrow terminal and note the page holds still.".to_string());
    for section in 1..=8 {
        lines.push(String::new());
        lines.push(format!("Section {section}"));
        lines.push("─────────".to_string());
        for paragraph in 1..=3 {
            lines.push(format!(
                "Paragraph {paragraph}. Placeholder copy that exists so the pane has",
            ));
            lines.push("something to scroll through while you try the widgets out.".to_string());
        }
    }
    lines
}
