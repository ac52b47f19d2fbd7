//! Typography presets: a font stack and a base size.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::registry::{self, Entry};

/// Id of the preset returned for unknown ids.
pub const DEFAULT_TYPOGRAPHY: &str = "system";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyPreset {
    pub id: String,
    pub name: String,
    /// CSS font stack, most preferred family first.
    pub font_family: String,
    /// Base font size in px.
    pub font_size: u32,
}

impl Entry for TypographyPreset {
    fn id(&self) -> &str {
        &self.id
    }
}

impl TypographyPreset {
    /// Families of the stack in order, quotes stripped.
    pub fn families(&self) -> Vec<&str> {
        self.font_family
            .split(',')
            .map(|family| family.trim().trim_matches(|c| c == '"' || c == '\''))
            .filter(|family| !family.is_empty())
            .collect()
    }
}

fn preset(id: &str, name: &str, font_family: &str, font_size: u32) -> TypographyPreset {
    TypographyPreset {
        id: id.to_string(),
        name: name.to_string(),
        font_family: font_family.to_string(),
        font_size,
    }
}

static TYPOGRAPHY: LazyLock<Vec<TypographyPreset>> = LazyLock::new(|| {
    vec![
        preset(
            "system",
            "System UI",
            "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif",
            14,
        ),
        preset("inter", "Inter", "Inter, \"Helvetica Neue\", Arial, sans-serif", 14),
        preset("roboto", "Roboto", "Roboto, \"Helvetica Neue\", Arial, sans-serif", 14),
        preset("serif", "Editorial Serif", "Merriweather, Georgia, \"Times New Roman\", serif", 16),
        preset("mono", "Monospace", "\"JetBrains Mono\", \"Fira Code\", Menlo, monospace", 13),
    ]
});

/// All typography presets in declaration order.
pub fn list_typography() -> &'static [TypographyPreset] {
    &TYPOGRAPHY
}

pub fn find_typography(id: &str) -> Option<&'static TypographyPreset> {
    registry::lookup(list_typography(), id)
}

/// Look up a typography preset; unknown ids yield `system`.
pub fn get_typography(id: &str) -> &'static TypographyPreset {
    registry::lookup_or_default(list_typography(), id, "typography")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_typography_defaults_to_system() {
        assert_eq!(get_typography("comic-sans").id, DEFAULT_TYPOGRAPHY);
        assert_eq!(get_typography("serif").font_size, 16);
    }

    #[test]
    fn test_families_strip_quotes() {
        let families = get_typography("system").families();
        assert_eq!(families[2], "Segoe UI");
        assert_eq!(families.last(), Some(&"sans-serif"));
    }
}
