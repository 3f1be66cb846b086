// ModusKit - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Theme family
// =============================================================================

/// One of the three Modus brand skins, independent of light/dark mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeFamily {
    #[default]
    ModusClassic,
    ModusModern,
    Connect,
}

impl ThemeFamily {
    /// Returns all variants in display order.
    pub fn all() -> &'static [ThemeFamily] {
        &[
            ThemeFamily::ModusClassic,
            ThemeFamily::ModusModern,
            ThemeFamily::Connect,
        ]
    }

    /// Identifier used in attribute values and persisted JSON.
    pub fn id(&self) -> &'static str {
        match self {
            ThemeFamily::ModusClassic => "modus-classic",
            ThemeFamily::ModusModern => "modus-modern",
            ThemeFamily::Connect => "connect",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            ThemeFamily::ModusClassic => "Modus Classic",
            ThemeFamily::ModusModern => "Modus Modern",
            ThemeFamily::Connect => "Connect",
        }
    }

    /// Parse an identifier as written in config files (case-insensitive).
    pub fn from_id(id: &str) -> Option<ThemeFamily> {
        let id = id.trim().to_lowercase();
        Self::all().iter().copied().find(|f| f.id() == id)
    }
}

impl std::fmt::Display for ThemeFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

// =============================================================================
// Theme mode
// =============================================================================

/// Light or dark colour scheme, orthogonal to the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn id(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The opposite mode.
    pub fn flipped(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Mode matching an OS "prefers dark" reading.
    pub fn from_prefers_dark(prefers_dark: bool) -> ThemeMode {
        if prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

// =============================================================================
// Theme config
// =============================================================================

/// The active `{family, mode}` pair. Both axes are always defined.
///
/// This is also the exact shape persisted in the preference store:
/// `{"family":"modus-classic","mode":"light"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ThemeConfig {
    pub family: ThemeFamily,
    pub mode: ThemeMode,
}

impl ThemeConfig {
    pub fn new(family: ThemeFamily, mode: ThemeMode) -> Self {
        Self { family, mode }
    }

    /// `<family>-<mode>`, the single attribute value consumed by styling.
    pub fn full_theme_name(&self) -> String {
        format!("{}-{}", self.family.id(), self.mode.id())
    }
}

// =============================================================================
// Root attributes (presentation layer)
// =============================================================================

/// Identifying attributes on the presentation root.
///
/// The theme store writes here; the renderer reads from here. Nothing else
/// about styling is owned by the core.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootAttributes {
    values: BTreeMap<String, String>,
}

impl RootAttributes {
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
