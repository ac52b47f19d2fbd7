//! Template configurator.
//!
//! Holds the working configuration of one UI template for one customization
//! session: seeded from the template's defaults, adjusted through setters,
//! then rendered to a theme file or saved as project metadata.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use architect_core::config::METADATA_DIR;
use architect_core::template::find_template;
use architect_core::theme::get_theme;
use architect_core::typography::get_typography;
use architect_core::{ArchitectError, ArchitectResult, Customization, Framework, TemplateConfig, UiTemplate};

use crate::theme_file;

/// Name of the metadata file written by [`TemplateConfigurator::save_configuration`].
pub const METADATA_FILE: &str = "ui-template.json";

/// Snapshot of a configurator, in the shape saved to the metadata file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationSnapshot {
    pub template_id: String,
    pub template_name: String,
    pub framework: String,
    pub config: TemplateConfig,
    pub components: Vec<String>,
    pub layouts: Vec<String>,
    pub dependencies: BTreeMap<String, String>,
    pub assets: Vec<String>,
}

/// Working configuration for one UI template.
#[derive(Debug, Clone)]
pub struct TemplateConfigurator {
    template: &'static UiTemplate,
    config: TemplateConfig,
}

impl TemplateConfigurator {
    /// Start from the template's default config.
    ///
    /// Unknown template ids are an error; there is no fallback template.
    pub fn new(template_id: &str) -> ArchitectResult<Self> {
        let template = find_template(template_id).ok_or_else(|| ArchitectError::unknown_template(template_id))?;
        debug!(template = template_id, framework = %template.framework, "Loaded template");
        Ok(Self {
            template,
            config: template.default_config.clone(),
        })
    }

    pub fn template(&self) -> &'static UiTemplate {
        self.template
    }

    pub fn framework(&self) -> Framework {
        self.template.framework()
    }

    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    /// Merge colors into the working colors. Keys not given are untouched.
    pub fn set_colors<K, V>(&mut self, colors: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.config
            .colors
            .extend(colors.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Merge typography entries (`fontFamily`, `fontSize`, ...).
    pub fn set_typography<K>(&mut self, typography: impl IntoIterator<Item = (K, Value)>) -> &mut Self
    where
        K: Into<String>,
    {
        self.config
            .typography
            .extend(typography.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    pub fn set_spacing(&mut self, spacing: u32) -> &mut Self {
        self.config.spacing = spacing;
        self
    }

    pub fn set_border_radius(&mut self, border_radius: u32) -> &mut Self {
        self.config.border_radius = border_radius;
        self
    }

    /// Apply a pasted customization.
    ///
    /// Theme and typography ids are merged first, then explicit values on
    /// top of them. Unknown ids resolve to the registry defaults.
    pub fn apply_customization(&mut self, custom: &Customization) -> &mut Self {
        if let Some(theme) = &custom.theme {
            self.set_colors(get_theme(theme).to_color_map());
        }
        if let Some(typography) = &custom.typography {
            let preset = get_typography(typography);
            self.set_typography([
                ("fontFamily", Value::from(preset.font_family.clone())),
                ("fontSize", Value::from(preset.font_size)),
            ]);
        }
        self.set_colors(custom.colors.clone());
        if let Some(family) = &custom.font_family {
            self.set_typography([("fontFamily", Value::from(family.clone()))]);
        }
        if let Some(size) = custom.font_size {
            self.set_typography([("fontSize", Value::from(size))]);
        }
        if let Some(spacing) = custom.spacing {
            self.set_spacing(spacing);
        }
        if let Some(radius) = custom.border_radius {
            self.set_border_radius(radius);
        }
        self
    }

    pub fn get_config(&self) -> ConfigurationSnapshot {
        ConfigurationSnapshot {
            template_id: self.template.id.clone(),
            template_name: self.template.name.clone(),
            framework: self.template.framework.clone(),
            config: self.config.clone(),
            components: self.template.components.clone(),
            layouts: self.template.layouts.clone(),
            dependencies: self.template.dependencies.clone(),
            assets: self.template.assets.clone(),
        }
    }

    /// Render the theme file for the template's framework.
    pub fn generate_theme_file(&self) -> String {
        theme_file::render(self.framework(), &self.config)
    }

    /// Path of the theme file relative to the project root.
    pub fn theme_file_path(&self) -> &'static str {
        theme_file::path(self.framework())
    }

    /// Write the rendered theme file under `output_dir`.
    pub fn write_theme_file(&self, output_dir: &Path) -> ArchitectResult<PathBuf> {
        let path = output_dir.join(self.theme_file_path());
        write_file(&path, &self.generate_theme_file())?;
        info!(path = %path.display(), "Wrote theme file");
        Ok(path)
    }

    /// Write the snapshot to `<output_dir>/.firebase-architect/ui-template.json`,
    /// replacing any previous file.
    pub fn save_configuration(&self, output_dir: &Path) -> ArchitectResult<PathBuf> {
        let path = output_dir.join(METADATA_DIR).join(METADATA_FILE);
        let json = serde_json::to_string_pretty(&self.get_config())?;
        write_file(&path, &json)?;
        info!(path = %path.display(), template = %self.template.id, "Saved template configuration");
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> ArchitectResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_template() {
        let err = TemplateConfigurator::new("bogus").unwrap_err();
        assert_eq!(err.to_string(), "Template 'bogus' not found");
    }

    #[test]
    fn test_set_colors_is_shallow_merge() {
        let mut configurator = TemplateConfigurator::new("material-modern").unwrap();
        let before = configurator.get_config().config.colors;

        let after = configurator.set_colors([("primary", "X")]).get_config().config.colors;
        assert_eq!(after["primary"], "X");
        for (role, value) in &before {
            if role != "primary" {
                assert_eq!(&after[role], value);
            }
        }
        assert_eq!(after.len(), before.len());
    }

    #[test]
    fn test_sequential_merges_keep_keys() {
        let mut configurator = TemplateConfigurator::new("tailwind-minimal").unwrap();
        configurator.set_colors([("brand", "#123456")]);
        configurator.set_colors([("accent", "#654321")]);

        let colors = &configurator.config().colors;
        assert_eq!(colors["brand"], "#123456");
        assert_eq!(colors["accent"], "#654321");
        assert!(colors.contains_key("primary"));
    }

    #[test]
    fn test_set_typography_keeps_other_keys() {
        let mut configurator = TemplateConfigurator::new("material-modern").unwrap();
        configurator.set_typography([("fontSize", Value::from(16))]);
        assert_eq!(configurator.config().font_size(), Some(16));
        assert!(configurator.config().font_family().unwrap().starts_with("Roboto"));
    }

    #[test]
    fn test_material_border_radius_in_theme() {
        let mut configurator = TemplateConfigurator::new("material-modern").unwrap();
        configurator.set_border_radius(12);
        let theme = configurator.generate_theme_file();
        assert!(theme.contains("borderRadius: 12"), "{}", theme);
        assert_eq!(configurator.theme_file_path(), "src/theme/theme.js");
    }

    #[test]
    fn test_unrecognised_framework_uses_generic_renderer() {
        let configurator = TemplateConfigurator::new("chakra-soft").unwrap();
        assert_eq!(configurator.framework(), Framework::Generic);
        let theme = configurator.generate_theme_file();
        let dump = serde_json::to_string_pretty(configurator.config()).unwrap();
        assert!(theme.contains(&dump));
    }

    #[test]
    fn test_apply_customization() {
        let custom = Customization::from_json(
            r##"{"theme":"green","typography":"serif","colors":{"primary":"#000000"},"fontSize":18,"spacing":4,"borderRadius":0}"##,
        )
        .unwrap();
        let mut configurator = TemplateConfigurator::new("material-modern").unwrap();
        configurator.apply_customization(&custom);

        let config = configurator.config();
        assert_eq!(config.color("primary"), Some("#000000"));
        assert_eq!(config.color("secondary"), Some("#00897b"));
        assert!(config.font_family().unwrap().starts_with("Merriweather"));
        assert_eq!(config.font_size(), Some(18));
        assert_eq!(config.spacing, 4);
        assert_eq!(config.border_radius, 0);
    }

    #[test]
    fn test_empty_customization_changes_nothing() {
        let mut configurator = TemplateConfigurator::new("bootstrap-classic").unwrap();
        let before = configurator.get_config();
        configurator.apply_customization(&Customization::default());
        assert_eq!(configurator.get_config(), before);
    }

    #[test]
    fn test_save_configuration_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut configurator = TemplateConfigurator::new("shadcn-clean").unwrap();
        configurator.set_spacing(6).set_colors([("primary", "#0ea5e9")]);

        let path = configurator.save_configuration(dir.path()).unwrap();
        assert_eq!(path, dir.path().join(".firebase-architect/ui-template.json"));

        let text = std::fs::read_to_string(&path).unwrap();
        let saved: ConfigurationSnapshot = serde_json::from_str(&text).unwrap();
        assert_eq!(saved, configurator.get_config());

        let raw: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(raw["templateId"], "shadcn-clean");
        assert_eq!(raw["config"]["borderRadius"], 4);
    }

    #[test]
    fn test_save_configuration_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut configurator = TemplateConfigurator::new("ant-enterprise").unwrap();
        configurator.save_configuration(dir.path()).unwrap();
        configurator.set_border_radius(20);
        let path = configurator.save_configuration(dir.path()).unwrap();

        let saved: ConfigurationSnapshot = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(saved.config.border_radius, 20);
    }

    #[test]
    fn test_write_theme_file() {
        let dir = tempfile::tempdir().unwrap();
        let configurator = TemplateConfigurator::new("tailwind-minimal").unwrap();
        let path = configurator.write_theme_file(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("tailwind.config.js"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), configurator.generate_theme_file());
    }
}
