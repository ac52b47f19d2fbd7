//! UI template registry.
//!
//! A UI template is what the generator scaffolds: a target style framework,
//! a default configuration derived from a design system selection, and the
//! components, layouts, packages and assets it brings along.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::design::{get_design_system, model::DesignSystem};
use crate::registry::{self, Entry};
use crate::theme::{get_theme, ColorTheme};
use crate::typography::{get_typography, TypographyPreset};

/// Radius used when a design system has no `md` size.
const FALLBACK_RADIUS: u32 = 4;

/// Target style system of a generated theme file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    Material,
    AntDesign,
    Tailwind,
    Bootstrap,
    Shadcn,
    /// Any unrecognised label.
    Generic,
}

impl Framework {
    /// Map a free-text framework label; unknown labels become `Generic`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "mui" | "material" | "material-ui" => Framework::Material,
            "antd" | "ant" | "ant-design" => Framework::AntDesign,
            "tailwind" | "tailwindcss" => Framework::Tailwind,
            "bootstrap" => Framework::Bootstrap,
            "shadcn" | "shadcn-ui" | "shadcn/ui" => Framework::Shadcn,
            _ => Framework::Generic,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Material => "Material UI",
            Framework::AntDesign => "Ant Design",
            Framework::Tailwind => "Tailwind CSS",
            Framework::Bootstrap => "Bootstrap",
            Framework::Shadcn => "shadcn/ui",
            Framework::Generic => "Generic",
        }
    }
}

/// Resolved style configuration of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub colors: BTreeMap<String, String>,
    pub typography: BTreeMap<String, Value>,
    pub spacing: u32,
    pub border_radius: u32,
}

impl TemplateConfig {
    /// Config seeded from a design system, theme and typography selection.
    pub fn from_selection(system: &DesignSystem, theme: &ColorTheme, typography: &TypographyPreset) -> Self {
        let mut fonts = BTreeMap::new();
        fonts.insert("fontFamily".to_string(), Value::from(typography.font_family.clone()));
        fonts.insert("fontSize".to_string(), Value::from(typography.font_size));

        Self {
            colors: theme.to_color_map(),
            typography: fonts,
            spacing: system.foundations.spacing.base,
            border_radius: system
                .foundations
                .border_radius
                .get("md")
                .copied()
                .unwrap_or(FALLBACK_RADIUS),
        }
    }

    pub fn color(&self, role: &str) -> Option<&str> {
        self.colors.get(role).map(String::as_str)
    }

    /// Typography entry as stored, whatever its JSON type.
    pub fn typography_value(&self, key: &str) -> Option<&Value> {
        self.typography.get(key)
    }

    /// `fontFamily` when it is a string.
    pub fn font_family(&self) -> Option<&str> {
        self.typography_value("fontFamily").and_then(Value::as_str)
    }

    /// `fontSize` when it is a whole number of pixels.
    pub fn font_size(&self) -> Option<u64> {
        self.typography_value("fontSize").and_then(Value::as_u64)
    }
}

/// A scaffoldable UI template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Free-text framework label, mapped with [`Framework::from_label`].
    pub framework: String,
    pub design_system: String,
    /// Theme the default colors were taken from.
    pub theme: String,
    /// Typography preset the default fonts were taken from.
    pub typography: String,
    pub default_config: TemplateConfig,
    pub components: Vec<String>,
    pub layouts: Vec<String>,
    pub dependencies: BTreeMap<String, String>,
    pub assets: Vec<String>,
}

impl Entry for UiTemplate {
    fn id(&self) -> &str {
        &self.id
    }
}

impl UiTemplate {
    pub fn framework(&self) -> Framework {
        Framework::from_label(&self.framework)
    }
}

struct TemplateSpec<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    framework: &'a str,
    design_system: &'a str,
    theme: &'a str,
    typography: &'a str,
    color_overrides: &'a [(&'a str, &'a str)],
    components: &'a [&'a str],
    layouts: &'a [&'a str],
    dependencies: &'a [(&'a str, &'a str)],
    assets: &'a [&'a str],
}

fn build(spec: TemplateSpec<'_>) -> UiTemplate {
    let mut default_config = TemplateConfig::from_selection(
        get_design_system(spec.design_system),
        get_theme(spec.theme),
        get_typography(spec.typography),
    );
    for (role, value) in spec.color_overrides {
        default_config.colors.insert(role.to_string(), value.to_string());
    }

    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    UiTemplate {
        id: spec.id.to_string(),
        name: spec.name.to_string(),
        description: spec.description.to_string(),
        framework: spec.framework.to_string(),
        design_system: spec.design_system.to_string(),
        theme: spec.theme.to_string(),
        typography: spec.typography.to_string(),
        default_config,
        components: strings(spec.components),
        layouts: strings(spec.layouts),
        dependencies: spec
            .dependencies
            .iter()
            .map(|(name, version)| (name.to_string(), version.to_string()))
            .collect(),
        assets: strings(spec.assets),
    }
}

static TEMPLATES: LazyLock<Vec<UiTemplate>> = LazyLock::new(|| {
    vec![
        build(TemplateSpec {
            id: "material-modern",
            name: "Material Modern",
            description: "MUI dashboard shell with elevated cards and a navigation drawer",
            framework: "mui",
            design_system: "material",
            theme: "blue",
            typography: "roboto",
            color_overrides: &[],
            components: &["AppBar", "Drawer", "DataGrid", "Card", "Dialog"],
            layouts: &["dashboardGrid", "spreadsheet"],
            dependencies: &[
                ("@mui/material", "^5.15.0"),
                ("@mui/icons-material", "^5.15.0"),
                ("@emotion/react", "^11.11.0"),
                ("@emotion/styled", "^11.11.0"),
            ],
            assets: &["fonts/roboto.css"],
        }),
        build(TemplateSpec {
            id: "ant-enterprise",
            name: "Ant Enterprise",
            description: "Dense admin console built on Ant Design tokens",
            framework: "antd",
            design_system: "ant",
            theme: "blue",
            typography: "system",
            color_overrides: &[("primary", "#1677ff"), ("success", "#52c41a"), ("warning", "#faad14"), ("error", "#ff4d4f")],
            components: &["Layout", "Menu", "Table", "Form", "Modal"],
            layouts: &["dashboardGrid", "spreadsheet", "kanban"],
            dependencies: &[("antd", "^5.12.0"), ("@ant-design/icons", "^5.2.0")],
            assets: &[],
        }),
        build(TemplateSpec {
            id: "tailwind-minimal",
            name: "Tailwind Minimal",
            description: "Utility-first shell with light strokes and generous whitespace",
            framework: "tailwind",
            design_system: "fluent",
            theme: "purple",
            typography: "inter",
            color_overrides: &[],
            components: &["Sidebar", "Navbar", "StatCard", "Table"],
            layouts: &["dashboardGrid", "kanban"],
            dependencies: &[("tailwindcss", "^3.4.0"), ("postcss", "^8.4.0"), ("autoprefixer", "^10.4.0")],
            assets: &["fonts/inter.css"],
        }),
        build(TemplateSpec {
            id: "bootstrap-classic",
            name: "Bootstrap Classic",
            description: "Square-cornered Bootstrap layout with Sass variables",
            framework: "bootstrap",
            design_system: "carbon",
            theme: "blue",
            typography: "system",
            color_overrides: &[],
            components: &["Navbar", "Card", "Table", "Modal"],
            layouts: &["dashboardGrid", "spreadsheet"],
            dependencies: &[("bootstrap", "^5.3.0"), ("react-bootstrap", "^2.9.0"), ("sass", "^1.69.0")],
            assets: &[],
        }),
        build(TemplateSpec {
            id: "shadcn-clean",
            name: "shadcn Clean",
            description: "Radix primitives styled through CSS variables",
            framework: "shadcn",
            design_system: "fluent",
            theme: "slate",
            typography: "inter",
            color_overrides: &[],
            components: &["Button", "Card", "Sheet", "DataTable", "Command"],
            layouts: &["dashboardGrid", "kanban"],
            dependencies: &[
                ("tailwindcss", "^3.4.0"),
                ("class-variance-authority", "^0.7.0"),
                ("clsx", "^2.0.0"),
                ("tailwind-merge", "^2.0.0"),
                ("@radix-ui/react-slot", "^1.0.2"),
            ],
            assets: &["fonts/inter.css"],
        }),
        build(TemplateSpec {
            id: "chakra-soft",
            name: "Chakra Soft",
            description: "Rounded, friendly components on Chakra UI",
            framework: "chakra",
            design_system: "material",
            theme: "green",
            typography: "inter",
            color_overrides: &[],
            components: &["Box", "Stack", "Card", "Drawer"],
            layouts: &["dashboardGrid"],
            dependencies: &[
                ("@chakra-ui/react", "^2.8.0"),
                ("@emotion/react", "^11.11.0"),
                ("framer-motion", "^10.16.0"),
            ],
            assets: &[],
        }),
    ]
});

/// All UI templates in declaration order.
pub fn list_templates() -> &'static [UiTemplate] {
    &TEMPLATES
}

/// Look up a UI template. Unlike the token registries there is no default.
pub fn find_template(id: &str) -> Option<&'static UiTemplate> {
    registry::lookup(list_templates(), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_labels() {
        assert_eq!(Framework::from_label("mui"), Framework::Material);
        assert_eq!(Framework::from_label(" AntD "), Framework::AntDesign);
        assert_eq!(Framework::from_label("shadcn/ui"), Framework::Shadcn);
        assert_eq!(Framework::from_label("chakra"), Framework::Generic);
        assert_eq!(Framework::from_label(""), Framework::Generic);
    }

    #[test]
    fn test_material_modern_defaults() {
        let template = find_template("material-modern").unwrap();
        assert_eq!(template.framework(), Framework::Material);
        let config = &template.default_config;
        assert_eq!(config.spacing, 8);
        assert_eq!(config.border_radius, 8);
        assert_eq!(config.color("primary"), Some("#1976d2"));
        assert_eq!(config.font_size(), Some(14));
        assert!(config.font_family().unwrap().starts_with("Roboto"));
    }

    #[test]
    fn test_typography_value_keeps_raw_json() {
        let mut config = find_template("material-modern").unwrap().default_config.clone();
        config.typography.insert("fontSize".to_string(), Value::from("16px"));
        assert_eq!(config.typography_value("fontSize"), Some(&Value::from("16px")));
        assert_eq!(config.font_size(), None);
        assert_eq!(config.typography_value("letterSpacing"), None);
    }

    #[test]
    fn test_color_overrides_apply() {
        let template = find_template("ant-enterprise").unwrap();
        assert_eq!(template.default_config.color("primary"), Some("#1677ff"));
        assert_eq!(template.default_config.color("info"), Some("#0288d1"));
        assert_eq!(template.default_config.border_radius, 6);
    }

    #[test]
    fn test_templates_reference_known_entries() {
        for template in list_templates() {
            assert!(crate::design::find_design_system(&template.design_system).is_some());
            assert!(crate::theme::find_theme(&template.theme).is_some());
            assert!(crate::typography::find_typography(&template.typography).is_some());
            for layout in &template.layouts {
                assert!(crate::layout::find_layout(layout).is_some(), "{}", layout);
            }
        }
        assert!(find_template("bogus").is_none());
    }
}
