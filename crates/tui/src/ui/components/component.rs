//! Component system for the Topnav TUI.
//!
//! Defines the `Component` trait that all UI elements implement. Components
//! handle localized events, update their internal state, and render
//! themselves into a provided `Rect`, reporting side effects back to the
//! runtime via `Effect`s rather than mutating global state directly.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use topnav_types::{Effect, Msg};

use crate::app::App;

/// A trait representing a UI component with its own state and behavior.
///
/// # Design principles
///
/// - Components own only local UI behavior; durable state lives in `App`
/// - Event handlers return effects; the runtime applies them
/// - `render` is side-effect free apart from frame drawing and recording
///   hit-test areas
pub(crate) trait Component {
    /// Handle key events routed to this component.
    #[allow(dead_code)]
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events routed to this component.
    #[allow(dead_code)]
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Process an application message (ticks, resizes).
    ///
    /// Called for every message regardless of focus; used for state
    /// synchronization such as animation progress and edge-triggered side
    /// effects.
    #[allow(dead_code)]
    fn handle_message(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Keyboard hints shown in the hint bar while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}
