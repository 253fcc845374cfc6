//! Top navigation bar component.
//!
//! Renders one trigger per navigation link: leaves activate directly,
//! branches open a popover submenu anchored under the trigger. Below the
//! narrow breakpoint the row collapses to a single hamburger trigger that
//! opens the drawer instead. The bar owns the drawer-open flag; the drawer
//! itself only reads it.

mod nav_bar_component;
mod popover;
mod state;

pub use nav_bar_component::NavBarComponent;
pub use popover::Popover;
pub use state::{NARROW_BREAKPOINT, NavBarState};
