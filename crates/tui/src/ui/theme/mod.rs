//! Theme styling module for the TUI UI layer.
//!
//! Defines semantic theme roles, the Nord and Dracula palettes, and helper
//! builders for ratatui widgets and styles. Prefer these helpers over
//! hard-coding colors to keep the UI consistent.

use std::env;

use tracing::debug;

pub mod catalog;
pub mod dracula;
pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use dracula::DraculaTheme;
pub use nord::NordTheme;
pub use roles::Theme;

/// Selects a theme based on the environment override and the caller's
/// preference, falling back to the default palette.
pub fn load(preferred_theme: Option<&str>) -> Box<dyn Theme> {
    if let Ok(theme_name) = env::var("TOPNAV_THEME")
        && let Some(definition) = catalog::resolve(theme_name.trim())
    {
        return definition.build();
    }

    if let Some(name) = preferred_theme {
        if let Some(definition) = catalog::resolve(name.trim()) {
            return definition.build();
        }
        debug!("Unknown theme '{name}'; falling back to the default palette.");
    }

    catalog::default_theme().build()
}
