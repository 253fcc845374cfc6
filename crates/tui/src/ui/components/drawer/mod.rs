//! Sliding drawer overlay component.
//!
//! A full-viewport panel that slides in from the right when the nav bar's
//! drawer flag flips open. Engages the body scroll lock exactly once per
//! open edge and releases it exactly once per close edge.

mod drawer_component;
mod state;

pub use drawer_component::DrawerComponent;
pub use state::{DrawerRow, DrawerState, drawer_rows};
