//! Theme file generation command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use architect_codegen::{generate_design_system_md, write_design_system_md, TemplateConfigurator};
use architect_core::{build_template_config, ArchitectConfig, Customization};

#[derive(Args)]
pub struct ThemeArgs {
    /// Template ID (defaults to `template` in architect.toml)
    pub template: Option<String>,

    /// Customization JSON file (generator input or bare customization object)
    #[arg(long)]
    pub customization: Option<PathBuf>,

    /// Primary color
    #[arg(long)]
    pub primary: Option<String>,

    /// Secondary color
    #[arg(long)]
    pub secondary: Option<String>,

    /// Extra color override (role=value), repeatable
    #[arg(long = "color", value_parser = parse_key_val)]
    pub colors: Vec<(String, String)>,

    /// Font family
    #[arg(long)]
    pub font_family: Option<String>,

    /// Base font size in pixels
    #[arg(long)]
    pub font_size: Option<u32>,

    /// Base spacing unit in pixels
    #[arg(long)]
    pub spacing: Option<u32>,

    /// Base border radius in pixels
    #[arg(long)]
    pub border_radius: Option<u32>,

    /// Output directory (defaults to `output_dir` in architect.toml, then the project)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the theme file instead of writing anything
    #[arg(long)]
    pub dry_run: bool,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected role=value, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("missing role in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

pub fn execute(args: ThemeArgs, project_dir: &Path) -> Result<()> {
    let config = ArchitectConfig::load(project_dir)?;

    let template_id = args
        .template
        .clone()
        .or_else(|| config.template.clone())
        .context("No template given. Pass one or set `template` in architect.toml.")?;
    let mut configurator = TemplateConfigurator::new(&template_id)?;

    let custom = load_customization(&args, &config)?;
    configurator.apply_customization(&custom);
    apply_flags(&mut configurator, &args);

    if args.dry_run {
        println!("{}", format!("// {}", configurator.theme_file_path()).as_str().dimmed());
        println!("{}", configurator.generate_theme_file());
        return Ok(());
    }

    let output_dir = match &args.output {
        Some(dir) => dir.clone(),
        None => config.output_dir(project_dir),
    };

    let theme_path = configurator.write_theme_file(&output_dir)?;
    println!("{} Wrote {}", "✓".green().bold(), theme_path.display());

    let metadata_path = configurator.save_configuration(&output_dir)?;
    println!("{} Saved {}", "✓".green().bold(), metadata_path.display());

    let selection = build_template_config(&custom.request_for(configurator.template()));
    let generated = generate_design_system_md(selection.design_system, configurator.config());
    let doc_path = write_design_system_md(&generated, &output_dir)?;
    println!("{} Wrote {}", "✓".green().bold(), doc_path);

    println!(
        "\n{} {} ({})",
        "Template:".bold(),
        configurator.template().name,
        configurator.framework().display_name()
    );
    Ok(())
}

fn load_customization(args: &ThemeArgs, config: &ArchitectConfig) -> Result<Customization> {
    if let Some(path) = &args.customization {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return Ok(Customization::from_json(&text)?);
    }

    Ok(match config.preset()? {
        Some(preset) => Customization::from_selection(&preset.resolve()),
        None => Customization::default(),
    })
}

fn apply_flags(configurator: &mut TemplateConfigurator, args: &ThemeArgs) {
    if let Some(primary) = &args.primary {
        configurator.set_colors([("primary", primary.as_str())]);
    }
    if let Some(secondary) = &args.secondary {
        configurator.set_colors([("secondary", secondary.as_str())]);
    }
    configurator.set_colors(args.colors.iter().cloned());
    if let Some(family) = &args.font_family {
        configurator.set_typography([("fontFamily", serde_json::Value::from(family.as_str()))]);
    }
    if let Some(size) = args.font_size {
        configurator.set_typography([("fontSize", serde_json::Value::from(size))]);
    }
    if let Some(spacing) = args.spacing {
        configurator.set_spacing(spacing);
    }
    if let Some(radius) = args.border_radius {
        configurator.set_border_radius(radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_val() {
        assert_eq!(parse_key_val("accent=#ff0000").unwrap(), ("accent".to_string(), "#ff0000".to_string()));
        assert!(parse_key_val("accent").is_err());
        assert!(parse_key_val("=#fff").is_err());
    }
}
