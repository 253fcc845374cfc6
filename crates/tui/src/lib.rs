//! # Topnav TUI Library
//!
//! Terminal rendition of a responsive site navigation: a top navigation bar
//! whose branch items open popover submenus, a sliding drawer overlay for
//! narrow viewports, and a scroll-locked content pane behind the drawer.
//!
//! ## Architecture
//!
//! The UI follows a component-based architecture where each element
//! (nav bar, drawer, content pane) is implemented as a separate component
//! with its own state struct. Components report `Effect`s instead of
//! mutating state they do not own; the runtime applies effects centrally.

mod app;
mod ui;

use anyhow::Result;
use topnav_types::NavLink;

/// Runs the TUI with the given navigation links and optional theme name.
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal on the way out.
///
/// # Errors
///
/// Returns an error for terminal setup failures or event loop runtime
/// errors.
pub async fn run(links: Vec<NavLink>, theme_name: Option<&str>) -> Result<()> {
    ui::runtime::run_app(links, theme_name).await
}
