//! Application state for the Topnav TUI.
//!
//! Holds the state of every component plus the shared context and the
//! scroll-lock registry. State transitions happen in
//! component event handlers and in `update`; effects travel back to the
//! runtime, which applies them to the state that owns them.

use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use topnav_types::{Effect, Msg, NavLink};

use crate::ui::components::common::ScrollLockRegistry;
use crate::ui::components::content::ContentState;
use crate::ui::components::drawer::DrawerState;
use crate::ui::components::nav_bar::NavBarState;
use crate::ui::theme::Theme;

/// Cross-cutting shared context owned by the App.
///
/// Holds runtime-wide objects like the active theme, avoiding threading
/// multiple references through components.
#[derive(Debug)]
pub struct SharedCtx {
    /// Active color theme
    pub theme: Box<dyn Theme>,
}

impl SharedCtx {
    pub fn new(theme: Box<dyn Theme>) -> Self {
        Self { theme }
    }
}

/// The main application state.
pub struct App {
    /// Shared, cross-cutting context (theme, config)
    pub ctx: SharedCtx,
    /// Navigation bar state; owns the drawer-open flag
    pub nav_bar: NavBarState,
    /// Drawer presentation state (edge tracking, slide progress)
    pub drawer: DrawerState,
    /// Page content behind the bar
    pub content: ContentState,
    /// Scroll-lock registry for background panes
    pub scroll_lock: ScrollLockRegistry,
    /// Global focus tree
    pub focus: Focus,
    /// Destination of the most recent navigation effect. Routing is the
    /// embedding caller's job; the TUI only records and logs it.
    pub last_navigation: Option<String>,
    focus_root: FocusFlag,
}

impl App {
    /// Creates the application state for the given navigation links.
    pub fn new(links: Vec<NavLink>, theme: Box<dyn Theme>) -> Self {
        let mut app = Self {
            ctx: SharedCtx::new(theme),
            nav_bar: NavBarState::new(links),
            drawer: DrawerState::default(),
            content: ContentState::new(),
            scroll_lock: ScrollLockRegistry::default(),
            focus: Focus::default(),
            last_navigation: None,
            focus_root: FocusFlag::named("app"),
        };
        app.focus = FocusBuilder::build_for(&app);
        app
    }

    /// Updates global state for an application message.
    ///
    /// Component-local reactions (animation progress, the drawer's lock
    /// edges) live in the components' `handle_message`.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        if let Msg::Resize(width, _) = msg
            && NavBarState::is_narrow(*width)
        {
            // The item row disappears below the breakpoint; open panels
            // must not survive it.
            self.nav_bar.close_all_popovers();
        }
        Vec::new()
    }

    /// Runs the drawer's edge-triggered scroll-lock synchronization
    /// against the flag the nav bar owns.
    pub fn sync_drawer_scroll_lock(&mut self) {
        let open = self.nav_bar.drawer_open;
        self.drawer
            .sync_scroll_lock(open, &mut self.scroll_lock, &mut self.content);
    }

    /// Returns whether any animation is in flight, for the runtime's
    /// tick-rate selection.
    pub fn is_animating(&self) -> bool {
        self.drawer.is_animating(self.nav_bar.drawer_open) || self.nav_bar.any_popover_animating()
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.widget(&self.nav_bar);
        builder.widget(&self.content);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.focus_root.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}
