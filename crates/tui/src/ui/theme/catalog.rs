use super::{DraculaTheme, NordTheme, Theme};

/// Describes a selectable theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used in `--theme` and the env override.
    pub id: &'static str,
    /// Theme aliases that map back to this definition.
    pub aliases: &'static [&'static str],
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

/// Ordered list of selectable themes.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "nord",
        aliases: &["nord"],
        factory: || Box::new(NordTheme::new()),
    },
    ThemeDefinition {
        id: "dracula",
        aliases: &["dracula"],
        factory: || Box::new(DraculaTheme::new()),
    },
];

/// Resolves a theme name (id or alias, case-insensitive) to a definition.
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let needle = name.to_ascii_lowercase();
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.id == needle || definition.aliases.contains(&needle.as_str()))
}

/// Returns the default theme definition.
pub fn default_theme() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_ids_case_insensitively() {
        assert_eq!(resolve("Dracula").map(|d| d.id), Some("dracula"));
        assert_eq!(resolve("NORD").map(|d| d.id), Some("nord"));
        assert!(resolve("solarized").is_none());
    }
}
