use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::{Position, Rect};
use topnav_types::NavLink;

use super::popover::Popover;

/// Viewport width (columns) below which the bar collapses to the hamburger
/// trigger and the drawer takes over.
pub const NARROW_BREAKPOINT: u16 = 100;

/// State for the top navigation bar.
///
/// Owns the link list, one popover per item, the drawer-open flag (single
/// source of truth for the overlay), and the rat-focus flags plus rendered
/// areas used for keyboard navigation and mouse hit testing.
#[derive(Debug)]
pub struct NavBarState {
    /// Ordered navigation entries.
    pub links: Vec<NavLink>,
    /// Submenu state, parallel to `links`; inert entries for leaves.
    pub popovers: Vec<Popover>,
    /// Whether the mobile drawer is open. Only the nav bar mutates this;
    /// the drawer reads it and requests changes via effects.
    pub drawer_open: bool,
    /// Focus flag for the container in the global focus tree.
    pub container_focus: FocusFlag,
    /// Focus flags for each item; kept in sync with `links` length.
    pub item_focus_flags: Vec<FocusFlag>,
    /// Last rendered area of the bar; used for mouse hit testing.
    pub last_area: Rect,
    /// Last computed per-item trigger areas for hit testing.
    pub trigger_areas: Vec<Rect>,
    /// Last rendered hamburger trigger area; `Some` only on narrow
    /// viewports.
    pub hamburger_area: Option<Rect>,
}

impl NavBarState {
    /// Creates nav bar state for the provided links.
    ///
    /// Focus defaults to the first item if available.
    pub fn new(links: Vec<NavLink>) -> Self {
        let popovers = links.iter().map(Popover::for_link).collect();
        let item_focus_flags: Vec<FocusFlag> = (0..links.len())
            .map(|i| FocusFlag::named(&format!("nav.item.{i}")))
            .collect();
        if let Some(first) = item_focus_flags.first() {
            first.set(true);
        }
        Self {
            links,
            popovers,
            drawer_open: false,
            container_focus: FocusFlag::named("nav.bar"),
            item_focus_flags,
            last_area: Rect::default(),
            trigger_areas: Vec::new(),
            hamburger_area: None,
        }
    }

    /// Returns whether a viewport of the given width renders the hamburger
    /// trigger instead of the item row.
    pub fn is_narrow(width: u16) -> bool {
        width < NARROW_BREAKPOINT
    }

    /// Index of the item whose focus flag is set, if any.
    pub fn focused_item(&self) -> Option<usize> {
        self.item_focus_flags.iter().position(|flag| flag.get())
    }

    /// Returns the flag of the neighboring item in the given direction,
    /// wrapping at the ends.
    pub fn cycle_focus(&self, forward: bool) -> Option<FocusFlag> {
        let len = self.item_focus_flags.len();
        if len == 0 {
            return None;
        }
        let ordinal = if forward { len + 1 } else { len - 1 };
        let idx = self.focused_item()?;
        self.item_focus_flags.get((idx + ordinal) % len).cloned()
    }

    /// Closes every open popover whose item no longer holds focus.
    ///
    /// This is the focus-leave dismissal: moving focus off a branch item
    /// closes its panel, whether focus went to a sibling or out of the bar.
    pub fn close_unfocused_popovers(&mut self) {
        for (idx, popover) in self.popovers.iter_mut().enumerate() {
            if popover.is_open() && !self.item_focus_flags.get(idx).is_some_and(|flag| flag.get()) {
                popover.close();
            }
        }
    }

    /// Closes every open popover.
    pub fn close_all_popovers(&mut self) {
        for popover in &mut self.popovers {
            popover.close();
        }
    }

    /// Returns whether any popover reveal is still in motion.
    pub fn any_popover_animating(&self) -> bool {
        self.popovers.iter().any(Popover::is_animating)
    }

    /// Returns whether a position lands inside an open popover panel.
    pub fn position_in_popover(&self, position: Position) -> bool {
        self.popovers
            .iter()
            .any(|popover| popover.is_open() && popover.panel_area.contains(position))
    }
}

impl HasFocus for NavBarState {
    /// Builds a focus subtree consisting of each item as a leaf under the
    /// container focus flag.
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for flag in &self.item_focus_flags {
            builder.leaf_widget(flag);
        }
        builder.end(tag);
    }

    /// Returns the container focus flag for the nav bar.
    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    /// Returns the last rendered area for mouse focus integration.
    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topnav_types::Sublink;

    fn sample_links() -> Vec<NavLink> {
        vec![
            NavLink::leaf("A", "/a"),
            NavLink::branch("B", vec![Sublink::new("B1", "/b1")]).unwrap(),
        ]
    }

    #[test]
    fn leaf_and_branch_items_get_matching_popovers() {
        let state = NavBarState::new(sample_links());
        assert_eq!(state.popovers.len(), 2);
        assert!(state.popovers[0].is_inert());
        assert!(!state.popovers[1].is_inert());
        assert!(!state.drawer_open);
    }

    #[test]
    fn popover_count_follows_link_count() {
        for count in [0usize, 1, 10] {
            let links: Vec<NavLink> = (0..count)
                .map(|i| NavLink::leaf(format!("L{i}"), format!("/l{i}")))
                .collect();
            let state = NavBarState::new(links);
            assert_eq!(state.popovers.len(), count);
            assert_eq!(state.item_focus_flags.len(), count);
        }
    }

    #[test]
    fn focus_cycles_with_wraparound() {
        let state = NavBarState::new(sample_links());
        assert_eq!(state.focused_item(), Some(0));

        let next = state.cycle_focus(true).unwrap();
        assert_eq!(next.widget_id(), state.item_focus_flags[1].widget_id());

        let prev = state.cycle_focus(false).unwrap();
        assert_eq!(prev.widget_id(), state.item_focus_flags[1].widget_id());
    }

    #[test]
    fn losing_focus_closes_the_item_popover() {
        let mut state = NavBarState::new(sample_links());
        // Focus item 1 and open its popover.
        state.item_focus_flags[0].set(false);
        state.item_focus_flags[1].set(true);
        state.popovers[1].toggle();
        assert!(state.popovers[1].is_open());

        state.close_unfocused_popovers();
        assert!(state.popovers[1].is_open());

        // Focus moves away; the panel closes.
        state.item_focus_flags[1].set(false);
        state.close_unfocused_popovers();
        assert!(!state.popovers[1].is_open());
    }
}
