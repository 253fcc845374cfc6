use ratatui::layout::Rect;
use topnav_types::NavLink;

use crate::ui::components::common::{ScrollLockRegistry, ScrollTarget};
use crate::ui::components::content::ContentState;

/// Presentation state for the drawer overlay.
///
/// The logical open flag lives in `NavBarState`; this struct only tracks
/// what the drawer needs to react to it: the previously observed value for
/// edge detection, the cosmetic slide progress, and rendered hit-test
/// areas.
#[derive(Debug, Default)]
pub struct DrawerState {
    prev_open: bool,
    /// Visible panel columns; 0 is fully hidden, `width` fully open.
    progress: u16,
    width: u16,
    /// Keyboard selection among the drawer rows.
    pub selected_row: usize,
    /// Last rendered close-glyph area.
    pub close_area: Rect,
    /// Last rendered row areas, parallel to `drawer_rows`.
    pub row_areas: Vec<Rect>,
}

impl DrawerState {
    /// Applies the scroll-lock side effect on visibility edges.
    ///
    /// Compares the externally owned flag against the previously observed
    /// value: a false→true edge locks the body (capturing its metrics), a
    /// true→false edge unlocks it and restores the captured metrics.
    /// Steady-state calls with an unchanged flag never touch the registry,
    /// however often they repeat.
    pub fn sync_scroll_lock(
        &mut self,
        open: bool,
        registry: &mut ScrollLockRegistry,
        content: &mut ContentState,
    ) {
        if open == self.prev_open {
            return;
        }
        if open {
            registry.lock(ScrollTarget::Body, content.metrics);
            self.selected_row = 0;
        } else if let Some(saved) = registry.unlock(ScrollTarget::Body) {
            content.metrics = saved;
        }
        self.prev_open = open;
    }

    /// Records the viewport width the slide is measured against.
    pub fn resize(&mut self, width: u16) {
        self.width = width;
        self.progress = self.progress.min(width);
    }

    /// Advances the slide one tick toward the flag's resting position.
    pub fn tick(&mut self, open: bool) {
        let step = (self.width / 3).max(1);
        if open {
            self.progress = (self.progress + step).min(self.width);
        } else {
            self.progress = self.progress.saturating_sub(step);
        }
    }

    /// Returns whether the slide is still in motion.
    pub fn is_animating(&self, open: bool) -> bool {
        if open {
            self.progress < self.width
        } else {
            self.progress > 0
        }
    }

    /// Returns whether the panel occupies any columns at all. While false
    /// the drawer renders nothing and is hidden from the interaction
    /// surface entirely.
    pub fn is_visible(&self, open: bool) -> bool {
        open || self.progress > 0
    }

    /// Visible panel columns.
    pub fn progress(&self) -> u16 {
        self.progress
    }
}

/// One row of the drawer's vertical link list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerRow {
    /// Row text.
    pub label: String,
    /// Destination; `None` for branch headers, which are not activatable.
    pub href: Option<String>,
    /// Whether the row is indented under a branch header.
    pub indented: bool,
}

/// Flattens the link list into drawer rows: leaves become rows, branches
/// become a header followed by their sublinks.
pub fn drawer_rows(links: &[NavLink]) -> Vec<DrawerRow> {
    let mut rows = Vec::new();
    for link in links {
        match link {
            NavLink::Leaf { label, href } => rows.push(DrawerRow {
                label: label.clone(),
                href: Some(href.clone()),
                indented: false,
            }),
            NavLink::Branch { label, sublinks } => {
                rows.push(DrawerRow {
                    label: label.clone(),
                    href: None,
                    indented: false,
                });
                for sublink in sublinks {
                    rows.push(DrawerRow {
                        label: sublink.label.clone(),
                        href: Some(sublink.href.clone().unwrap_or_else(|| "#".into())),
                        indented: true,
                    });
                }
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use topnav_types::Sublink;

    fn scrolled_content(offset: i16) -> ContentState {
        let mut content = ContentState::new();
        content.metrics.update_viewport_height(10);
        content.metrics.update_content_height(60);
        content.metrics.scroll_lines(offset);
        content
    }

    #[test]
    fn lock_fires_exactly_once_per_edge() {
        let mut drawer = DrawerState::default();
        let mut registry = ScrollLockRegistry::default();
        let mut content = scrolled_content(0);

        // Repeated passes with an unchanged flag are steady-state no-ops.
        drawer.sync_scroll_lock(false, &mut registry, &mut content);
        drawer.sync_scroll_lock(false, &mut registry, &mut content);
        assert_eq!(registry.lock_count(ScrollTarget::Body), 0);

        drawer.sync_scroll_lock(true, &mut registry, &mut content);
        assert_eq!(registry.lock_count(ScrollTarget::Body), 1);
        drawer.sync_scroll_lock(true, &mut registry, &mut content);
        drawer.sync_scroll_lock(true, &mut registry, &mut content);
        assert_eq!(registry.lock_count(ScrollTarget::Body), 1);

        drawer.sync_scroll_lock(false, &mut registry, &mut content);
        assert_eq!(registry.lock_count(ScrollTarget::Body), 0);

        // Rapid toggling stays balanced: one lock per true-edge, one
        // unlock per false-edge.
        drawer.sync_scroll_lock(true, &mut registry, &mut content);
        drawer.sync_scroll_lock(false, &mut registry, &mut content);
        drawer.sync_scroll_lock(true, &mut registry, &mut content);
        assert_eq!(registry.lock_count(ScrollTarget::Body), 1);
        drawer.sync_scroll_lock(false, &mut registry, &mut content);
        assert_eq!(registry.lock_count(ScrollTarget::Body), 0);
        assert!(!registry.is_locked(ScrollTarget::Body));
    }

    #[test]
    fn closing_restores_captured_metrics() {
        let mut drawer = DrawerState::default();
        let mut registry = ScrollLockRegistry::default();
        let mut content = scrolled_content(7);
        let captured = content.metrics;

        drawer.sync_scroll_lock(true, &mut registry, &mut content);
        // Something nudges the pane while it is locked.
        content.metrics.scroll_lines(20);
        assert_ne!(content.metrics, captured);

        drawer.sync_scroll_lock(false, &mut registry, &mut content);
        assert_eq!(content.metrics, captured);
    }

    #[test]
    fn slide_progress_follows_the_flag() {
        let mut drawer = DrawerState::default();
        drawer.resize(90);
        assert!(!drawer.is_visible(false));

        drawer.tick(true);
        assert!(drawer.is_visible(true));
        assert!(drawer.is_animating(true));
        drawer.tick(true);
        drawer.tick(true);
        assert_eq!(drawer.progress(), 90);
        assert!(!drawer.is_animating(true));

        // Reversing mid-slide just retargets the offset.
        drawer.tick(false);
        assert!(drawer.is_animating(false));
        assert!(drawer.is_visible(false));
        drawer.tick(false);
        drawer.tick(false);
        assert_eq!(drawer.progress(), 0);
        assert!(!drawer.is_visible(false));
    }

    #[test]
    fn rows_flatten_leaves_and_branches() {
        let links = vec![
            NavLink::leaf("Home", "/"),
            NavLink::branch("Docs", vec![Sublink::new("Guide", "/guide"), Sublink::new("API", "/api")]).unwrap(),
        ];
        let rows = drawer_rows(&links);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].href.as_deref(), Some("/"));
        assert_eq!(rows[1].href, None);
        assert!(rows[2].indented);
        assert_eq!(rows[3].label, "API");
    }
}
