//! Customization input.
//!
//! The preview app exports the user's selection as JSON; a human pastes it
//! into the generator's `architecture.uiTemplate.customization` field. Every
//! field is optional and unknown ids resolve through registry defaults.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::design::{DesignSystemContext, Scale};
use crate::error::{ArchitectError, ArchitectResult};
use crate::layout::NavigationStyle;
use crate::preset::{build_template_config, TemplateRequest, TemplateSelection};
use crate::template::UiTemplate;

/// JSON pointers checked, in order, when the input is a whole architecture
/// document rather than a bare customization object.
const EMBEDDED_POINTERS: [&str; 2] = ["/architecture/uiTemplate/customization", "/uiTemplate/customization"];

/// User customization of a UI template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Customization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_style: Option<NavigationStyle>,
    /// Explicit colors by role name; win over the theme's colors.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub colors: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
}

impl Customization {
    /// Parse a bare customization object or an architecture document that
    /// embeds one.
    pub fn from_json(text: &str) -> ArchitectResult<Self> {
        let root: Value = serde_json::from_str(text)?;
        let value = EMBEDDED_POINTERS
            .iter()
            .find_map(|pointer| root.pointer(pointer))
            .unwrap_or(&root);

        if !value.is_object() {
            return Err(ArchitectError::invalid_customization(format!(
                "expected a JSON object, found {}",
                json_kind(value)
            )));
        }
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Export a resolved selection as the JSON the generator accepts.
    pub fn from_selection(selection: &TemplateSelection) -> Self {
        let system = selection.design_system;
        Self {
            design_system: Some(system.id.clone()),
            layout: Some(selection.layout.id.clone()),
            theme: Some(selection.theme.id.clone()),
            typography: Some(selection.typography.id.clone()),
            navigation_style: Some(selection.navigation_style),
            colors: selection.theme.to_color_map(),
            font_family: Some(selection.typography.font_family.clone()),
            font_size: Some(selection.typography.font_size),
            spacing: Some(system.foundations.spacing.base),
            border_radius: system.foundations.border_radius.get("md").copied(),
        }
    }

    /// Registry request for the ids; missing ids resolve to defaults.
    pub fn request(&self) -> TemplateRequest {
        TemplateRequest {
            design_system_id: self.design_system.clone().unwrap_or_default(),
            layout_id: self.layout.clone().unwrap_or_default(),
            theme_id: self.theme.clone().unwrap_or_default(),
            typography_id: self.typography.clone().unwrap_or_default(),
            navigation_style: self.navigation_style.unwrap_or_default(),
        }
    }

    /// Registry request for the ids, taking missing ones from `template`.
    pub fn request_for(&self, template: &UiTemplate) -> TemplateRequest {
        TemplateRequest {
            design_system_id: self.design_system.clone().unwrap_or_else(|| template.design_system.clone()),
            layout_id: self
                .layout
                .clone()
                .or_else(|| template.layouts.first().cloned())
                .unwrap_or_default(),
            theme_id: self.theme.clone().unwrap_or_else(|| template.theme.clone()),
            typography_id: self.typography.clone().unwrap_or_else(|| template.typography.clone()),
            navigation_style: self.navigation_style.unwrap_or_default(),
        }
    }

    pub fn selection(&self) -> TemplateSelection {
        build_template_config(&self.request())
    }

    /// Resolution context for previewing this customization.
    ///
    /// A custom border radius or spacing scales the system's foundations
    /// relative to its `md` radius and base spacing.
    pub fn preview_context(&self) -> DesignSystemContext<'static> {
        let selection = self.selection();
        let foundations = &selection.design_system.foundations;
        let mut context = DesignSystemContext::new(selection.design_system, selection.theme);
        if let (Some(custom), Some(base)) = (self.border_radius, foundations.border_radius.get("md")) {
            context = context.with_radius_scale(Scale::ratio(custom, *base));
        }
        if let Some(custom) = self.spacing {
            context = context.with_spacing_scale(Scale::ratio(custom, foundations.spacing.base));
        }
        context
    }

    pub fn to_json_pretty(&self) -> ArchitectResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON Schema of the customization input.
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(Customization)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::get_preset;

    #[test]
    fn test_parse_bare_object() {
        let custom = Customization::from_json(
            r##"{"designSystem":"carbon","navigationStyle":"compact","colors":{"primary":"#ff0000"},"borderRadius":12}"##,
        )
        .unwrap();
        assert_eq!(custom.design_system.as_deref(), Some("carbon"));
        assert_eq!(custom.navigation_style, Some(NavigationStyle::Compact));
        assert_eq!(custom.colors["primary"], "#ff0000");
        assert_eq!(custom.border_radius, Some(12));
        assert_eq!(custom.spacing, None);
    }

    #[test]
    fn test_parse_embedded_in_architecture() {
        let text = r#"{
            "architecture": {
                "models": [],
                "uiTemplate": { "id": "material-modern", "customization": { "theme": "green", "spacing": 4 } }
            }
        }"#;
        let custom = Customization::from_json(text).unwrap();
        assert_eq!(custom.theme.as_deref(), Some("green"));
        assert_eq!(custom.spacing, Some(4));
    }

    #[test]
    fn test_rejects_non_object() {
        let err = Customization::from_json("[1, 2]").unwrap_err();
        assert_eq!(err.to_string(), "Invalid customization: expected a JSON object, found an array");
        assert!(Customization::from_json("{not json").is_err());
    }

    #[test]
    fn test_export_round_trip() {
        let selection = get_preset("carbon-kanban").unwrap().resolve();
        let exported = Customization::from_selection(&selection);
        let json = exported.to_json_pretty().unwrap();
        let parsed = Customization::from_json(&json).unwrap();
        assert_eq!(parsed, exported);
        assert_eq!(parsed.selection(), selection);
    }

    #[test]
    fn test_missing_ids_resolve_to_defaults() {
        let selection = Customization::default().selection();
        assert_eq!(selection.design_system.id, "material");
        assert_eq!(selection.layout.id, "dashboardGrid");
        assert_eq!(selection.navigation_style, NavigationStyle::Side);
    }

    #[test]
    fn test_request_for_template_fills_missing_ids() {
        let template = crate::template::find_template("tailwind-minimal").unwrap();
        let custom = Customization {
            theme: Some("orange".to_string()),
            ..Default::default()
        };
        let selection = build_template_config(&custom.request_for(template));
        assert_eq!(selection.design_system.id, "fluent");
        assert_eq!(selection.layout.id, "dashboardGrid");
        assert_eq!(selection.theme.id, "orange");
        assert_eq!(selection.typography.id, "inter");
    }

    #[test]
    fn test_preview_context_scales_radius() {
        let custom = Customization {
            design_system: Some("material".to_string()),
            border_radius: Some(16),
            ..Default::default()
        };
        let context = custom.preview_context();
        assert_eq!(context.border_radius("md"), "16px");
        assert_eq!(context.border_radius("sm"), "8px");
        assert_eq!(context.spacing(2), "8px");
    }

    #[test]
    fn test_schema_names_fields() {
        let schema = serde_json::to_value(Customization::json_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("designSystem"));
        assert!(properties.contains_key("navigationStyle"));
        assert!(properties.contains_key("borderRadius"));
    }
}
