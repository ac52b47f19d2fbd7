//! Color theme registry.
//!
//! A theme maps semantic roles to color values. A role missing from a theme
//! is unset; callers choose their own fallback.

pub mod color;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::registry::{self, Entry};

/// Id of the theme returned for unknown ids.
pub const DEFAULT_THEME: &str = "blue";

/// Semantic color roles a complete theme defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticRole {
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
    Info,
    Background,
    Surface,
    Text,
}

impl SemanticRole {
    pub const ALL: [SemanticRole; 9] = [
        SemanticRole::Primary,
        SemanticRole::Secondary,
        SemanticRole::Success,
        SemanticRole::Warning,
        SemanticRole::Error,
        SemanticRole::Info,
        SemanticRole::Background,
        SemanticRole::Surface,
        SemanticRole::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticRole::Primary => "primary",
            SemanticRole::Secondary => "secondary",
            SemanticRole::Success => "success",
            SemanticRole::Warning => "warning",
            SemanticRole::Error => "error",
            SemanticRole::Info => "info",
            SemanticRole::Background => "background",
            SemanticRole::Surface => "surface",
            SemanticRole::Text => "text",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == name)
    }
}

/// A named palette of semantic colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTheme {
    pub id: String,
    pub name: String,
    pub colors: BTreeMap<SemanticRole, String>,
}

impl Entry for ColorTheme {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ColorTheme {
    /// Color for a role, `None` when the theme leaves it unset.
    pub fn color(&self, role: SemanticRole) -> Option<&str> {
        self.colors.get(&role).map(String::as_str)
    }

    /// Roles this theme does not define.
    pub fn missing_roles(&self) -> Vec<SemanticRole> {
        SemanticRole::ALL
            .into_iter()
            .filter(|role| !self.colors.contains_key(role))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_roles().is_empty()
    }

    /// Theme from a role-name color map. Keys that are not roles are skipped.
    pub fn from_color_map(id: &str, name: &str, colors: &BTreeMap<String, String>) -> Self {
        ColorTheme {
            id: id.to_string(),
            name: name.to_string(),
            colors: colors
                .iter()
                .filter_map(|(key, value)| SemanticRole::from_name(key).map(|role| (role, value.clone())))
                .collect(),
        }
    }

    /// Colors keyed by role name, the shape template configs use.
    pub fn to_color_map(&self) -> BTreeMap<String, String> {
        self.colors
            .iter()
            .map(|(role, value)| (role.as_str().to_string(), value.clone()))
            .collect()
    }
}

fn theme(id: &str, name: &str, colors: [&str; 9]) -> ColorTheme {
    ColorTheme {
        id: id.to_string(),
        name: name.to_string(),
        colors: SemanticRole::ALL
            .into_iter()
            .zip(colors)
            .map(|(role, value)| (role, value.to_string()))
            .collect(),
    }
}

// Color order follows `SemanticRole::ALL`.
static THEMES: LazyLock<Vec<ColorTheme>> = LazyLock::new(|| {
    vec![
        theme(
            "blue",
            "Ocean Blue",
            ["#1976d2", "#9c27b0", "#2e7d32", "#ed6c02", "#d32f2f", "#0288d1", "#f5f7fa", "#ffffff", "#1a2027"],
        ),
        theme(
            "green",
            "Forest Green",
            ["#2e7d32", "#00897b", "#43a047", "#f9a825", "#c62828", "#0277bd", "#f4f8f4", "#ffffff", "#1b2a1c"],
        ),
        theme(
            "purple",
            "Royal Purple",
            ["#6a1b9a", "#d81b60", "#388e3c", "#f57c00", "#d32f2f", "#1e88e5", "#f8f5fb", "#ffffff", "#241a2b"],
        ),
        theme(
            "orange",
            "Sunset Orange",
            ["#ef6c00", "#5d4037", "#558b2f", "#ffa000", "#c62828", "#0097a7", "#fff8f2", "#ffffff", "#2b1d12"],
        ),
        theme(
            "slate",
            "Midnight Slate",
            ["#90caf9", "#ce93d8", "#66bb6a", "#ffa726", "#f44336", "#29b6f6", "#0f172a", "#1e293b", "#e2e8f0"],
        ),
    ]
});

/// All themes in declaration order.
pub fn list_themes() -> &'static [ColorTheme] {
    &THEMES
}

pub fn find_theme(id: &str) -> Option<&'static ColorTheme> {
    registry::lookup(list_themes(), id)
}

/// Look up a theme; unknown ids yield `blue`.
pub fn get_theme(id: &str) -> &'static ColorTheme {
    registry::lookup_or_default(list_themes(), id, "theme")
}
