//! UI rendering module for the Topnav TUI.
//!
//! Provides the component implementations, the main view composition, the
//! theming layer, and the runtime event loop.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
