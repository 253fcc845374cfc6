//! Open/close state machine for a branch item's submenu panel.
//!
//! Each branch trigger owns one `Popover`; leaves carry an inert instance so
//! the per-item collections stay parallel. Popovers are independent of each
//! other: opening one never touches a sibling, though a sibling's own
//! outside-click handling may close it on the same event.

use ratatui::layout::{Position, Rect};
use topnav_types::NavLink;

/// Per-item submenu state: the logical open flag, cosmetic reveal progress,
/// and the trigger/panel areas recorded at render time for hit testing.
#[derive(Debug, Default)]
pub struct Popover {
    open: bool,
    reveal: u16,
    target_rows: u16,
    /// Keyboard selection inside the open panel.
    pub selected_row: usize,
    /// Last rendered trigger area.
    pub trigger_area: Rect,
    /// Last rendered panel area; empty while closed.
    pub panel_area: Rect,
    /// Last rendered activatable row areas inside the panel.
    pub row_areas: Vec<Rect>,
}

impl Popover {
    /// Builds the popover for a link: inert for leaves, sized to the
    /// submenu rows for branches.
    pub fn for_link(link: &NavLink) -> Self {
        let target_rows = match link {
            NavLink::Leaf { .. } => 0,
            NavLink::Branch { sublinks, .. } => {
                let rows: u16 = sublinks
                    .iter()
                    .map(|sublink| 1 + u16::from(sublink.description.is_some()))
                    .sum();
                // rows + footer (2) + borders (2)
                rows + 4
            }
        };
        Self {
            target_rows,
            ..Self::default()
        }
    }

    /// Returns whether this popover belongs to a leaf and never opens.
    pub fn is_inert(&self) -> bool {
        self.target_rows == 0
    }

    /// Returns the logical open flag.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Activation: flips between open and closed. No-op for leaves.
    pub fn toggle(&mut self) {
        if self.is_inert() {
            return;
        }
        self.open = !self.open;
        if self.open {
            self.selected_row = 0;
        }
    }

    /// Closes the panel regardless of how the dismissal was triggered.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Closes the panel when a click landed outside both trigger and panel.
    /// Returns whether the popover closed.
    pub fn dismiss_if_outside(&mut self, position: Position) -> bool {
        if self.open && !self.trigger_area.contains(position) && !self.panel_area.contains(position) {
            self.close();
            return true;
        }
        false
    }

    /// Escape dismissal. Returns whether the popover consumed the key.
    pub fn on_escape(&mut self) -> bool {
        if self.open {
            self.close();
            return true;
        }
        false
    }

    /// Advances the cosmetic reveal toward its target: two ticks in, one
    /// tick out.
    pub fn tick(&mut self) {
        if self.target_rows == 0 {
            return;
        }
        if self.open {
            let step = self.target_rows / 2 + 1;
            self.reveal = (self.reveal + step).min(self.target_rows);
        } else {
            self.reveal = self.reveal.saturating_sub(self.target_rows);
        }
    }

    /// Returns whether the reveal is still in motion.
    pub fn is_animating(&self) -> bool {
        if self.open {
            self.reveal < self.target_rows
        } else {
            self.reveal > 0
        }
    }

    /// Rows of the panel currently visible.
    pub fn revealed_rows(&self) -> u16 {
        self.reveal.min(self.target_rows)
    }

    /// Moves the keyboard selection down through `row_count` rows.
    pub fn select_next(&mut self, row_count: usize) {
        if row_count > 0 {
            self.selected_row = (self.selected_row + 1) % row_count;
        }
    }

    /// Moves the keyboard selection up through `row_count` rows.
    pub fn select_prev(&mut self, row_count: usize) {
        if row_count > 0 {
            self.selected_row = (self.selected_row + row_count - 1) % row_count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topnav_types::Sublink;

    fn branch_popover() -> Popover {
        let link = NavLink::branch(
            "Products",
            vec![
                Sublink::new("Widgets", "/widgets").with_description("All the widgets"),
                Sublink::new("Gadgets", "/gadgets"),
            ],
        )
        .unwrap();
        Popover::for_link(&link)
    }

    #[test]
    fn leaf_popover_is_inert() {
        let mut popover = Popover::for_link(&NavLink::leaf("Home", "/"));
        assert!(popover.is_inert());
        popover.toggle();
        assert!(!popover.is_open());
    }

    #[test]
    fn activation_toggles_between_open_and_closed() {
        let mut popover = branch_popover();
        assert!(!popover.is_open());

        popover.toggle();
        assert!(popover.is_open());

        popover.toggle();
        assert!(!popover.is_open());
    }

    #[test]
    fn escape_closes_only_an_open_panel() {
        let mut popover = branch_popover();
        assert!(!popover.on_escape());
        assert!(!popover.is_open());

        popover.toggle();
        assert!(popover.on_escape());
        assert!(!popover.is_open());
    }

    #[test]
    fn outside_click_dismisses_open_panel() {
        let mut popover = branch_popover();
        popover.trigger_area = Rect::new(10, 0, 12, 3);
        popover.panel_area = Rect::new(8, 3, 20, 8);
        popover.toggle();

        // Inside the panel: stays open.
        assert!(!popover.dismiss_if_outside(Position::new(12, 5)));
        assert!(popover.is_open());

        // Inside the trigger: stays open (the toggle handles re-activation).
        assert!(!popover.dismiss_if_outside(Position::new(11, 1)));
        assert!(popover.is_open());

        // Elsewhere: closes.
        assert!(popover.dismiss_if_outside(Position::new(60, 20)));
        assert!(!popover.is_open());

        // While closed, outside clicks change nothing.
        assert!(!popover.dismiss_if_outside(Position::new(60, 20)));
        assert!(!popover.is_open());
    }

    #[test]
    fn reveal_animates_in_and_out() {
        let mut popover = branch_popover();
        assert_eq!(popover.revealed_rows(), 0);
        assert!(!popover.is_animating());

        popover.toggle();
        assert!(popover.is_animating());
        popover.tick();
        popover.tick();
        assert!(!popover.is_animating());
        // 2 sublinks + 1 description + footer + borders
        assert_eq!(popover.revealed_rows(), 7);

        popover.close();
        assert!(popover.is_animating());
        popover.tick();
        assert_eq!(popover.revealed_rows(), 0);
        assert!(!popover.is_animating());
    }
}
