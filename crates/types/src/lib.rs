//! Shared types for the Topnav TUI.
//!
//! This crate defines the navigation link model consumed by the widget
//! layer, the configuration error raised for malformed links, and the
//! `Msg`/`Effect` enums that carry events and side effects between the
//! runtime and the UI components.

use serde::Deserialize;
use thiserror::Error;

/// Error raised when a navigation link is structurally invalid.
///
/// Raised at construction (or configuration-file deserialization) time so a
/// bad link list fails loudly during startup instead of degrading the UI.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The item declares neither a destination nor a submenu.
    #[error("navigation item '{label}' must declare either an href or sublinks")]
    MissingTarget {
        /// Label of the offending item.
        label: String,
    },
    /// The item was declared as a branch but its sublink list is empty.
    #[error("navigation item '{label}' declares an empty sublink list")]
    EmptySublinks {
        /// Label of the offending item.
        label: String,
    },
}

/// A single entry inside a branch item's submenu panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sublink {
    /// Text shown on the submenu row.
    pub label: String,
    /// Destination followed when the row is activated.
    #[serde(default)]
    pub href: Option<String>,
    /// Optional icon glyph rendered before the label.
    #[serde(default)]
    pub icon: Option<String>,
    /// Optional one-line description rendered under the label.
    #[serde(default)]
    pub description: Option<String>,
}

impl Sublink {
    /// Creates a sublink with a label and destination and no decoration.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            icon: None,
            description: None,
        }
    }

    /// Attaches a description line to the sublink.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A top-level navigation entry.
///
/// The two variants make the leaf/branch distinction explicit: a `Leaf`
/// always has a destination and never a submenu, a `Branch` always has a
/// non-empty submenu. Construction goes through the validating helpers, so
/// an item with neither target nor submenu cannot exist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawNavLink")]
pub enum NavLink {
    /// Direct destination, rendered as a plain trigger.
    Leaf {
        /// Trigger label.
        label: String,
        /// Destination followed on activation.
        href: String,
    },
    /// Submenu trigger, rendered with a chevron and a popover panel.
    Branch {
        /// Trigger label.
        label: String,
        /// Submenu rows; guaranteed non-empty.
        sublinks: Vec<Sublink>,
    },
}

impl NavLink {
    /// Creates a leaf item.
    pub fn leaf(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Leaf {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Creates a branch item, rejecting an empty sublink list.
    pub fn branch(label: impl Into<String>, sublinks: Vec<Sublink>) -> Result<Self, ConfigError> {
        let label = label.into();
        if sublinks.is_empty() {
            return Err(ConfigError::EmptySublinks { label });
        }
        Ok(Self::Branch { label, sublinks })
    }

    /// Builds a link from loosely-typed parts, as read from configuration.
    ///
    /// Sublinks win when both are present (the href is ignored); an item
    /// with neither fails with [`ConfigError::MissingTarget`].
    pub fn from_parts(
        label: impl Into<String>,
        href: Option<String>,
        sublinks: Vec<Sublink>,
    ) -> Result<Self, ConfigError> {
        let label = label.into();
        if !sublinks.is_empty() {
            return Ok(Self::Branch { label, sublinks });
        }
        match href {
            Some(href) => Ok(Self::Leaf { label, href }),
            None => Err(ConfigError::MissingTarget { label }),
        }
    }

    /// Returns the trigger label.
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf { label, .. } | Self::Branch { label, .. } => label,
        }
    }

    /// Returns whether this item opens a submenu.
    pub fn is_branch(&self) -> bool {
        matches!(self, Self::Branch { .. })
    }

    /// Returns the submenu rows of a branch, or an empty slice for a leaf.
    pub fn sublinks(&self) -> &[Sublink] {
        match self {
            Self::Branch { sublinks, .. } => sublinks,
            Self::Leaf { .. } => &[],
        }
    }
}

/// Loosely-typed configuration form of a [`NavLink`].
///
/// Mirrors the JSON shape (`label` plus optional `href`/`sublinks`) and is
/// converted through [`NavLink::from_parts`] so malformed entries fail the
/// whole deserialization.
#[derive(Debug, Deserialize)]
struct RawNavLink {
    label: String,
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    sublinks: Vec<Sublink>,
}

impl TryFrom<RawNavLink> for NavLink {
    type Error = ConfigError;

    fn try_from(raw: RawNavLink) -> Result<Self, Self::Error> {
        NavLink::from_parts(raw.label, raw.href, raw.sublinks)
    }
}

/// Messages that can be sent to update the application state.
///
/// This enum defines the user-independent events that drive state
/// synchronization: animation ticks and terminal resizes. Key and mouse
/// input reaches components directly through their event handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick (drawer slide, popover reveal)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
}

/// Side effects that can be triggered by state changes.
///
/// This enum defines actions the runtime should perform as a result of
/// component interactions. Components report effects instead of mutating
/// state they do not own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open the mobile drawer (applied to the nav bar's flag by the owner)
    OpenDrawer,
    /// Close the mobile drawer
    CloseDrawer,
    /// Follow a destination; routing is delegated to the embedding caller
    Navigate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_requires_href_or_sublinks() {
        let err = NavLink::from_parts("Ghost", None, Vec::new()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingTarget {
                label: "Ghost".into()
            }
        );
    }

    #[test]
    fn from_parts_href_only_is_a_leaf() {
        let link = NavLink::from_parts("Home", Some("/".into()), Vec::new()).unwrap();
        assert_eq!(link, NavLink::leaf("Home", "/"));
        assert!(!link.is_branch());
        assert!(link.sublinks().is_empty());
    }

    #[test]
    fn sublinks_win_over_href() {
        let link = NavLink::from_parts(
            "Products",
            Some("/products".into()),
            vec![Sublink::new("Widgets", "/products/widgets")],
        )
        .unwrap();
        assert!(link.is_branch());
        assert_eq!(link.sublinks().len(), 1);
    }

    #[test]
    fn branch_rejects_empty_sublinks() {
        let err = NavLink::branch("Products", Vec::new()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::EmptySublinks {
                label: "Products".into()
            }
        );
    }

    #[test]
    fn deserializes_leaf_and_branch() {
        let json = r#"[
            {"label": "About", "href": "/about"},
            {"label": "Docs", "sublinks": [
                {"label": "Guide", "href": "/docs/guide", "description": "Getting started"}
            ]}
        ]"#;
        let links: Vec<NavLink> = serde_json::from_str(json).expect("deserialize links");
        assert_eq!(links.len(), 2);
        assert!(!links[0].is_branch());
        assert!(links[1].is_branch());
        assert_eq!(
            links[1].sublinks()[0].description.as_deref(),
            Some("Getting started")
        );
    }

    #[test]
    fn deserialization_fails_loudly_on_targetless_item() {
        let json = r#"{"label": "Ghost"}"#;
        let err = serde_json::from_str::<NavLink>(json).unwrap_err();
        assert!(err.to_string().contains("either an href or sublinks"));
    }
}
