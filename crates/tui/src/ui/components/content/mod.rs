//! Scrollable page content pane.
//!
//! Plays the document-body role behind the navigation bar: a vertically
//! scrollable pane that stops reacting to scroll input while the drawer
//! holds a lock on it.

mod content_component;
mod state;

pub use content_component::ContentComponent;
pub use state::ContentState;
