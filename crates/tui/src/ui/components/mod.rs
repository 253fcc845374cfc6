//! UI components: nav bar, drawer overlay, content pane.

pub mod common;
pub mod component;
pub mod content;
pub mod drawer;
pub mod nav_bar;

pub use component::*;

use ratatui::layout::{Position, Rect};

/// Finds which of a component's recorded item areas contains a mouse
/// position, after checking the click landed inside the component at all.
pub fn find_target_index_by_mouse_position(
    last_area: &Rect,
    item_areas: &[Rect],
    x: u16,
    y: u16,
) -> Option<usize> {
    let position = Position::new(x, y);
    if !last_area.contains(position) {
        return None;
    }
    item_areas.iter().position(|area| area.contains(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_testing_respects_container_bounds() {
        let container = Rect::new(0, 0, 20, 3);
        let items = vec![Rect::new(0, 0, 10, 3), Rect::new(10, 0, 10, 3)];

        assert_eq!(find_target_index_by_mouse_position(&container, &items, 3, 1), Some(0));
        assert_eq!(find_target_index_by_mouse_position(&container, &items, 14, 2), Some(1));
        // Outside the container, even if an item rect would match.
        assert_eq!(find_target_index_by_mouse_position(&container, &items, 3, 5), None);
    }
}
