//! Presets pin a design system, layout, theme, typography and navigation
//! style together for one-click selection in the preview.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::design::{get_design_system, model::DesignSystem};
use crate::layout::{get_layout, Layout, NavigationStyle};
use crate::registry::{self, Entry};
use crate::theme::{get_theme, ColorTheme};
use crate::typography::{get_typography, TypographyPreset};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub design_system: String,
    pub layout: String,
    pub theme: String,
    pub typography: String,
    pub navigation_style: NavigationStyle,
}

impl Entry for Preset {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Preset {
    pub fn request(&self) -> TemplateRequest {
        TemplateRequest {
            design_system_id: self.design_system.clone(),
            layout_id: self.layout.clone(),
            theme_id: self.theme.clone(),
            typography_id: self.typography.clone(),
            navigation_style: self.navigation_style,
        }
    }

    /// Resolve the pinned ids, falling back per registry.
    pub fn resolve(&self) -> TemplateSelection {
        build_template_config(&self.request())
    }
}

/// Ids to resolve into a [`TemplateSelection`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequest {
    pub design_system_id: String,
    pub layout_id: String,
    pub theme_id: String,
    pub typography_id: String,
    #[serde(default)]
    pub navigation_style: NavigationStyle,
}

/// Resolved registry entries for one selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateSelection {
    pub design_system: &'static DesignSystem,
    pub layout: &'static Layout,
    pub theme: &'static ColorTheme,
    pub typography: &'static TypographyPreset,
    pub navigation_style: NavigationStyle,
}

/// Resolve each id through its registry. Unknown ids resolve to the
/// registry's default entry, so this never fails.
pub fn build_template_config(request: &TemplateRequest) -> TemplateSelection {
    TemplateSelection {
        design_system: get_design_system(&request.design_system_id),
        layout: get_layout(&request.layout_id),
        theme: get_theme(&request.theme_id),
        typography: get_typography(&request.typography_id),
        navigation_style: request.navigation_style,
    }
}

fn preset(
    id: &str,
    name: &str,
    description: &str,
    [design_system, layout, theme, typography]: [&str; 4],
    navigation_style: NavigationStyle,
) -> Preset {
    Preset {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        design_system: design_system.to_string(),
        layout: layout.to_string(),
        theme: theme.to_string(),
        typography: typography.to_string(),
        navigation_style,
    }
}

static PRESETS: LazyLock<Vec<Preset>> = LazyLock::new(|| {
    vec![
        preset(
            "material-dashboard",
            "Material Dashboard",
            "Classic analytics dashboard with a side drawer",
            ["material", "dashboardGrid", "blue", "roboto"],
            NavigationStyle::Side,
        ),
        preset(
            "fluent-spreadsheet",
            "Fluent Spreadsheet",
            "Office-style data grid with a top command bar",
            ["fluent", "spreadsheet", "blue", "system"],
            NavigationStyle::Top,
        ),
        preset(
            "carbon-kanban",
            "Carbon Kanban",
            "Flat workflow board with side and top navigation",
            ["carbon", "kanban", "slate", "inter"],
            NavigationStyle::SideTop,
        ),
        preset(
            "ant-dashboard",
            "Ant Admin",
            "Dense admin dashboard with a compact rail",
            ["ant", "dashboardGrid", "blue", "system"],
            NavigationStyle::Compact,
        ),
        preset(
            "material-compact",
            "Material Compact",
            "Spreadsheet view with a collapsed navigation rail",
            ["material", "spreadsheet", "green", "roboto"],
            NavigationStyle::Compact,
        ),
        preset(
            "minimal-topnav",
            "Minimal Top Nav",
            "Kanban board with a single top bar",
            ["fluent", "kanban", "purple", "inter"],
            NavigationStyle::Top,
        ),
    ]
});

/// All presets in declaration order.
pub fn list_presets() -> &'static [Preset] {
    &PRESETS
}

/// First preset with a matching id.
pub fn get_preset(id: &str) -> Option<&'static Preset> {
    registry::lookup(list_presets(), id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::find_design_system;
    use crate::layout::find_layout;
    use crate::theme::find_theme;
    use crate::typography::find_typography;

    #[test]
    fn test_get_preset() {
        let preset = get_preset("material-dashboard").unwrap();
        assert_eq!(preset.design_system, "material");
        assert_eq!(preset.layout, "dashboardGrid");
        assert_eq!(preset.navigation_style, NavigationStyle::Side);
        assert!(get_preset("missing").is_none());
    }

    #[test]
    fn test_build_template_config_with_bogus_ids() {
        let selection = build_template_config(&TemplateRequest {
            design_system_id: "bogus".to_string(),
            layout_id: "bogus".to_string(),
            theme_id: "bogus".to_string(),
            typography_id: "bogus".to_string(),
            navigation_style: NavigationStyle::Side,
        });
        assert_eq!(selection.design_system.id, "material");
        assert_eq!(selection.layout.id, "dashboardGrid");
        assert_eq!(selection.theme.id, "blue");
        assert_eq!(selection.typography.id, "system");
        assert_eq!(selection.navigation_style, NavigationStyle::Side);
    }

    #[test]
    fn test_shipped_presets_resolve_exactly() {
        for preset in list_presets() {
            assert!(find_design_system(&preset.design_system).is_some(), "{}", preset.id);
            assert!(find_layout(&preset.layout).is_some(), "{}", preset.id);
            assert!(find_theme(&preset.theme).is_some(), "{}", preset.id);
            assert!(find_typography(&preset.typography).is_some(), "{}", preset.id);

            let selection = preset.resolve();
            assert_eq!(selection.design_system.id, preset.design_system);
            assert_eq!(selection.theme.id, preset.theme);
        }
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let request: TemplateRequest = serde_json::from_str(
            r#"{"designSystemId":"carbon","layoutId":"kanban","themeId":"slate","typographyId":"inter","navigationStyle":"side-top"}"#,
        )
        .unwrap();
        assert_eq!(request.navigation_style, NavigationStyle::SideTop);
        assert_eq!(build_template_config(&request).layout.id, "kanban");
    }
}
