//! Design system domain model.
//!
//! A design system is a set of foundation scales (spacing, radius, shadows,
//! borders, typography, transitions) plus a pattern table describing how each
//! component kind uses those foundations by symbolic name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::registry::Entry;

/// Complete design system: foundations plus component patterns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystem {
    pub id: String,
    pub name: String,
    pub vendor: String,
    #[serde(default)]
    pub description: String,
    pub foundations: Foundations,
    #[serde(default)]
    pub patterns: BTreeMap<ComponentKind, PatternDescriptor>,
}

impl Entry for DesignSystem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Foundation scale tables of a design system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Foundations {
    pub spacing: SpacingScale,
    pub border_radius: BTreeMap<String, u32>,
    pub shadows: BTreeMap<String, String>,
    pub borders: Borders,
    pub typography: TypeFoundation,
    pub transitions: Transitions,
}

/// Spacing scale: numeric step to pixel value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingScale {
    /// Grid unit in px, used as the default `spacing` of a template config.
    pub base: u32,
    pub scale: BTreeMap<u32, u32>,
}

/// Border widths and colors, keyed by width name and strength name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Borders {
    pub widths: BTreeMap<String, u32>,
    pub colors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeFoundation {
    pub font_weights: BTreeMap<String, u32>,
    pub line_heights: BTreeMap<String, f64>,
}

/// Transition durations and easing curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transitions {
    pub duration: BTreeMap<String, String>,
    pub easing: BTreeMap<String, String>,
}

/// Component kinds that carry a pattern descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Button,
    Card,
    Input,
    Table,
    Nav,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Button,
        ComponentKind::Card,
        ComponentKind::Input,
        ComponentKind::Table,
        ComponentKind::Nav,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Button => "button",
            ComponentKind::Card => "card",
            ComponentKind::Input => "input",
            ComponentKind::Table => "table",
            ComponentKind::Nav => "nav",
        }
    }

    /// Parse a component kind name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How one component kind uses the foundations.
///
/// Every field is a symbolic reference into the owning system's foundations,
/// except `variant`, which is free text, and `padding`, which is a pair of
/// spacing steps (vertical, horizontal).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<(u32, u32)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// Duration name used for the component's transition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<Box<PatternDescriptor>>,
}

impl PatternDescriptor {
    pub const EMPTY: PatternDescriptor = PatternDescriptor {
        variant: None,
        padding: None,
        border_radius: None,
        border: None,
        shadow: None,
        font_weight: None,
        transition: None,
        hover: None,
    };

    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: &str) -> Self {
        self.variant = Some(variant.to_string());
        self
    }

    pub fn padding(mut self, vertical: u32, horizontal: u32) -> Self {
        self.padding = Some((vertical, horizontal));
        self
    }

    pub fn radius(mut self, size: &str) -> Self {
        self.border_radius = Some(size.to_string());
        self
    }

    pub fn border(mut self, strength: &str) -> Self {
        self.border = Some(strength.to_string());
        self
    }

    pub fn shadow(mut self, size: &str) -> Self {
        self.shadow = Some(size.to_string());
        self
    }

    pub fn weight(mut self, weight: &str) -> Self {
        self.font_weight = Some(weight.to_string());
        self
    }

    pub fn transition(mut self, duration: &str) -> Self {
        self.transition = Some(duration.to_string());
        self
    }

    pub fn hover(mut self, hover: PatternDescriptor) -> Self {
        self.hover = Some(Box::new(hover));
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::EMPTY
    }

    /// Fields set on `over` replace ours; the hover descriptor is dropped.
    pub fn overlay(&self, over: &PatternDescriptor) -> PatternDescriptor {
        PatternDescriptor {
            variant: over.variant.clone().or_else(|| self.variant.clone()),
            padding: over.padding.or(self.padding),
            border_radius: over.border_radius.clone().or_else(|| self.border_radius.clone()),
            border: over.border.clone().or_else(|| self.border.clone()),
            shadow: over.shadow.clone().or_else(|| self.shadow.clone()),
            font_weight: over.font_weight.clone().or_else(|| self.font_weight.clone()),
            transition: over.transition.clone().or_else(|| self.transition.clone()),
            hover: None,
        }
    }
}

/// Build an owned table from static entries.
pub(crate) fn table<V: Clone>(entries: &[(&str, V)]) -> BTreeMap<String, V> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_kind_from_name() {
        assert_eq!(ComponentKind::from_name("button"), Some(ComponentKind::Button));
        assert_eq!(ComponentKind::from_name(" NAV "), Some(ComponentKind::Nav));
        assert_eq!(ComponentKind::from_name("tooltip"), None);
    }

    #[test]
    fn test_overlay_prefers_hover_fields() {
        let base = PatternDescriptor::new().radius("sm").shadow("sm").weight("medium");
        let merged = base.overlay(&PatternDescriptor::new().shadow("md"));
        assert_eq!(merged.shadow.as_deref(), Some("md"));
        assert_eq!(merged.border_radius.as_deref(), Some("sm"));
        assert_eq!(merged.font_weight.as_deref(), Some("medium"));
    }

    #[test]
    fn test_empty_descriptor() {
        assert!(PatternDescriptor::new().is_empty());
        assert!(!PatternDescriptor::new().variant("outlined").is_empty());
    }

    #[test]
    fn test_pattern_serializes_camel_case() {
        let pattern = PatternDescriptor::new().radius("md").weight("bold");
        let json = serde_json::to_value(&pattern).unwrap();
        assert_eq!(json["borderRadius"], "md");
        assert_eq!(json["fontWeight"], "bold");
        assert!(json.get("shadow").is_none());
    }
}
