//! Dracula theme: maps the canonical palette onto the application's theme
//! roles.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

pub const BACKGROUND: Color = Color::Rgb(0x28, 0x2A, 0x36); // #282A36
pub const CURRENT_LINE: Color = Color::Rgb(0x44, 0x47, 0x5A); // #44475A
pub const FOREGROUND: Color = Color::Rgb(0xF8, 0xF8, 0xF2); // #F8F8F2
pub const COMMENT: Color = Color::Rgb(0x62, 0x72, 0xA4); // #6272A4
pub const CYAN: Color = Color::Rgb(0x8B, 0xE9, 0xFD); // #8BE9FD
pub const PINK: Color = Color::Rgb(0xFF, 0x79, 0xC6); // #FF79C6
pub const PURPLE: Color = Color::Rgb(0xBD, 0x93, 0xF9); // #BD93F9

const BG_PANEL: Color = Color::Rgb(0x30, 0x32, 0x40);
const BG_MODAL_OVERLAY: Color = Color::Rgb(0x16, 0x17, 0x20);

fn build_dracula_roles() -> ThemeRoles {
    ThemeRoles {
        background: BACKGROUND,
        surface: BG_PANEL,
        surface_muted: CURRENT_LINE,
        border: CURRENT_LINE,

        text: FOREGROUND,
        text_secondary: FOREGROUND,
        text_muted: COMMENT,

        accent_primary: PINK,
        accent_secondary: PURPLE,

        selection_bg: CURRENT_LINE,
        selection_fg: FOREGROUND,
        focus: CYAN,

        modal_bg: BG_MODAL_OVERLAY,
    }
}

/// Dracula theme tuned for dark terminals.
#[derive(Debug, Clone)]
pub struct DraculaTheme {
    roles: ThemeRoles,
}

impl DraculaTheme {
    /// Construct a Dracula theme instance using the canonical palette.
    pub fn new() -> Self {
        Self {
            roles: build_dracula_roles(),
        }
    }
}

impl Default for DraculaTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DraculaTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
