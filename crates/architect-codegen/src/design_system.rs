//! Design system artifact generation.
//!
//! Generates `.firebase-architect/design-system.md` from a design system and
//! the working template config, giving the scaffolded project a token
//! reference that matches its theme file.

use anyhow::Result;
use std::path::Path;

use architect_core::config::METADATA_DIR;
use architect_core::design::model::{ComponentKind, DesignSystem};
use architect_core::design::{DesignSystemContext, Scale};
use architect_core::theme::{ColorTheme, SemanticRole};
use architect_core::TemplateConfig;

use crate::theme_file::{css_font_size, css_ident, font_family};

/// Generated design system markdown file.
#[derive(Debug, Clone)]
pub struct GeneratedDesignSystem {
    pub content: String,
    pub filename: String,
}

/// Generate the design-system.md content for a design system and a working
/// template config.
pub fn generate_design_system_md(system: &DesignSystem, config: &TemplateConfig) -> GeneratedDesignSystem {
    GeneratedDesignSystem {
        content: render_design_system_md(system, config),
        filename: "design-system.md".to_string(),
    }
}

/// Write the design-system.md file to the metadata directory.
pub fn write_design_system_md(generated: &GeneratedDesignSystem, project_dir: &Path) -> Result<String> {
    let dir = project_dir.join(METADATA_DIR);
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(&generated.filename);
    std::fs::write(&path, &generated.content)?;
    tracing::info!(path = %path.display(), "Wrote design system reference");
    Ok(path.display().to_string())
}

/// Render the design system into a markdown document.
///
/// Colors and typography come from `config`. Radius and spacing tokens are
/// scaled by the config's `borderRadius` against the system's `md` radius and
/// its `spacing` against the system's base unit.
pub fn render_design_system_md(system: &DesignSystem, config: &TemplateConfig) -> String {
    let foundations = &system.foundations;
    let palette = ColorTheme::from_color_map("working", "Working palette", &config.colors);
    let radius_scale = foundations
        .border_radius
        .get("md")
        .map_or(Scale::IDENTITY, |md| Scale::ratio(config.border_radius, *md));
    let context = DesignSystemContext::new(system, &palette)
        .with_radius_scale(radius_scale)
        .with_spacing_scale(Scale::ratio(config.spacing, foundations.spacing.base));
    let family = font_family(config);
    let size = css_font_size(config);
    let mut md = String::new();

    md.push_str(&format!("# Design System: {}\n\n", system.name));
    md.push_str(&format!("> Vendor: {}\n\n", system.vendor));
    if !system.description.is_empty() {
        md.push_str(&format!("{}\n\n", system.description));
    }
    md.push_str("All UI implementation MUST follow the design tokens defined below.\n\n");

    // CSS Custom Properties
    md.push_str("## CSS Custom Properties\n\n");
    md.push_str("```css\n:root {\n");

    md.push_str("  /* Colors */\n");
    for role in SemanticRole::ALL {
        if let Some(value) = palette.color(role) {
            md.push_str(&format!("  --color-{}: {};\n", role.as_str(), value));
        }
    }
    for (key, value) in extra_colors(config) {
        md.push_str(&format!("  --color-{}: {};\n", css_ident(key), value));
    }

    md.push_str("\n  /* Typography */\n");
    md.push_str(&format!("  --font-family: {};\n", family));
    md.push_str(&format!("  --font-size-base: {};\n", size));

    md.push_str("\n  /* Spacing */\n");
    for step in foundations.spacing.scale.keys() {
        md.push_str(&format!("  --spacing-{}: {};\n", step, context.spacing(*step)));
    }

    md.push_str("\n  /* Border Radius */\n");
    for name in foundations.border_radius.keys() {
        md.push_str(&format!("  --radius-{}: {};\n", name, context.border_radius(name)));
    }

    md.push_str("\n  /* Shadows */\n");
    for (name, value) in &foundations.shadows {
        md.push_str(&format!("  --shadow-{}: {};\n", name, value));
    }

    md.push_str("}\n```\n\n");

    // Color Palette
    md.push_str("## Color Palette\n\n");
    md.push_str("| Role | Value |\n");
    md.push_str("|------|-------|\n");
    for role in SemanticRole::ALL {
        let value = palette.color(role).map(|v| format!("`{}`", v)).unwrap_or_else(|| "-".to_string());
        md.push_str(&format!("| {} | {} |\n", role.as_str(), value));
    }
    for (key, value) in extra_colors(config) {
        md.push_str(&format!("| {} | `{}` |\n", key, value));
    }
    md.push('\n');

    // Typography
    md.push_str("## Typography\n\n");
    md.push_str(&format!("- **Font stack:** {}\n", family));
    md.push_str(&format!("- **Base size:** {}\n\n", size));
    md.push_str("| Weight | Value |\n");
    md.push_str("|--------|-------|\n");
    for (name, weight) in &foundations.typography.font_weights {
        md.push_str(&format!("| {} | {} |\n", name, weight));
    }
    md.push('\n');
    md.push_str("| Line Height | Value |\n");
    md.push_str("|-------------|-------|\n");
    for (name, value) in &foundations.typography.line_heights {
        md.push_str(&format!("| {} | {} |\n", name, value));
    }
    md.push('\n');

    // Spacing Scale
    md.push_str("## Spacing Scale\n\n");
    md.push_str(&format!("Base unit: {}px\n\n", config.spacing));
    md.push_str("| Step | Value |\n");
    md.push_str("|------|-------|\n");
    for step in foundations.spacing.scale.keys() {
        md.push_str(&format!("| `{}` | {} |\n", step, context.spacing(*step)));
    }
    md.push('\n');

    // Borders
    md.push_str("## Borders\n\n");
    md.push_str("| Strength | Color |\n");
    md.push_str("|----------|-------|\n");
    for (name, value) in &foundations.borders.colors {
        md.push_str(&format!("| {} | `{}` |\n", name, value));
    }
    md.push('\n');

    // Motion
    md.push_str("## Motion\n\n");
    md.push_str("| Duration | Value |\n");
    md.push_str("|----------|-------|\n");
    for (name, value) in &foundations.transitions.duration {
        md.push_str(&format!("| {} | {} |\n", name, value));
    }
    md.push('\n');
    md.push_str("| Easing | Curve |\n");
    md.push_str("|--------|-------|\n");
    for (name, value) in &foundations.transitions.easing {
        md.push_str(&format!("| {} | `{}` |\n", name, value));
    }
    md.push('\n');

    render_components_section(&mut md, &context);

    md
}

/// Color keys of the config that are not semantic roles.
fn extra_colors(config: &TemplateConfig) -> impl Iterator<Item = (&String, &String)> {
    config
        .colors
        .iter()
        .filter(|(key, _)| SemanticRole::from_name(key).is_none())
}

/// Render resolved component patterns.
fn render_components_section(md: &mut String, context: &DesignSystemContext<'_>) {
    let system = context.system();
    if system.patterns.is_empty() {
        return;
    }

    md.push_str("## Components\n\n");
    for kind in ComponentKind::ALL {
        if !system.patterns.contains_key(&kind) {
            continue;
        }
        let style = context.resolve_pattern(kind.as_str());
        md.push_str(&format!("### {}\n\n", kind));
        if let Some(variant) = &style.variant {
            md.push_str(&format!("**Variant:** {}\n\n", variant));
        }
        md.push_str("| Property | Value |\n");
        md.push_str("|----------|-------|\n");
        md.push_str(&format!("| padding | `{}` |\n", style.padding));
        md.push_str(&format!("| border-radius | `{}` |\n", style.border_radius));
        md.push_str(&format!("| border | `{}` |\n", style.border));
        md.push_str(&format!("| box-shadow | `{}` |\n", style.shadow));
        md.push_str(&format!("| font-weight | `{}` |\n", style.font_weight));
        if let Some(transition) = &style.transition {
            md.push_str(&format!("| transition | `{}` |\n", transition));
        }
        if let Some(hover) = &style.hover {
            md.push_str(&format!("| hover border | `{}` |\n", hover.border));
            md.push_str(&format!("| hover box-shadow | `{}` |\n", hover.shadow));
        }
        md.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use architect_core::preset::get_preset;
    use architect_core::TemplateSelection;

    use crate::configurator::TemplateConfigurator;

    fn selection_config(selection: &TemplateSelection) -> TemplateConfig {
        TemplateConfig::from_selection(selection.design_system, selection.theme, selection.typography)
    }

    #[test]
    fn test_render_material_dashboard() {
        let selection = get_preset("material-dashboard").unwrap().resolve();
        let generated = generate_design_system_md(selection.design_system, &selection_config(&selection));
        let md = &generated.content;

        assert_eq!(generated.filename, "design-system.md");
        assert!(md.starts_with("# Design System: Material Design\n"));
        assert!(md.contains("  --color-primary: #1976d2;\n"));
        assert!(md.contains("  --spacing-4: 16px;\n"));
        assert!(md.contains("  --radius-md: 8px;\n"));
        assert!(md.contains("### button\n\n**Variant:** contained"));
        assert!(md.contains("| padding | `8px 16px` |"));
    }

    #[test]
    fn test_unset_role_renders_dash() {
        let system = architect_core::design::get_design_system("carbon");
        let mut config = TemplateConfig::from_selection(
            system,
            architect_core::theme::get_theme("slate"),
            architect_core::typography::get_typography("mono"),
        );
        config.colors.remove("warning");

        let md = render_design_system_md(system, &config);
        assert!(md.contains("| warning | - |"));
        assert!(!md.contains("--color-warning"));
        assert!(md.contains("  --font-size-base: 13px;\n"));
    }

    #[test]
    fn test_doc_follows_working_config() {
        let mut configurator = TemplateConfigurator::new("ant-enterprise").unwrap();
        let system = architect_core::design::get_design_system(&configurator.template().design_system);

        let md = render_design_system_md(system, configurator.config());
        assert!(md.contains("  --color-primary: #1677ff;\n"));

        configurator
            .set_colors([("primary", "#ff0000"), ("brandAccent", "#00ff00")])
            .set_typography([("fontSize", serde_json::Value::from("15px"))])
            .set_border_radius(12);
        let md = render_design_system_md(system, configurator.config());
        assert!(md.contains("  --color-primary: #ff0000;\n"));
        assert!(md.contains("| primary | `#ff0000` |"));
        assert!(md.contains("  --color-brand-accent: #00ff00;\n"));
        assert!(md.contains("  --font-size-base: 15px;\n"));
        assert!(md.contains("  --radius-md: 12px;\n"));
        assert!(md.contains("  --radius-sm: 8px;\n"));
    }

    #[test]
    fn test_write_design_system_md() {
        let dir = tempfile::tempdir().unwrap();
        let selection = get_preset("ant-dashboard").unwrap().resolve();
        let generated = generate_design_system_md(selection.design_system, &selection_config(&selection));

        let path = write_design_system_md(&generated, dir.path()).unwrap();
        assert!(path.ends_with(".firebase-architect/design-system.md"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), generated.content);
    }
}
