//! Token resolution command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::warn;

use architect_core::design::model::ComponentKind;
use architect_core::design::{find_design_system, get_design_system, DesignSystemContext};
use architect_core::theme::{find_theme, get_theme, DEFAULT_THEME};
use architect_core::Customization;

use crate::output;

#[derive(Args)]
pub struct TokensArgs {
    /// Design system ID
    #[arg(default_value = "material")]
    pub system: String,

    /// Color theme ID
    #[arg(long, default_value = DEFAULT_THEME)]
    pub theme: String,

    /// Preview a customization JSON file instead (overrides system and theme)
    #[arg(long)]
    pub customization: Option<PathBuf>,

    /// Print resolved component styles as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: TokensArgs) -> Result<()> {
    let context = match &args.customization {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Customization::from_json(&text)?.preview_context()
        }
        None => {
            if find_design_system(&args.system).is_none() {
                warn!(system = %args.system, "Unknown design system, showing the default");
            }
            if find_theme(&args.theme).is_none() {
                warn!(theme = %args.theme, "Unknown theme, showing the default");
            }
            DesignSystemContext::new(get_design_system(&args.system), get_theme(&args.theme))
        }
    };

    if args.json {
        println!("{}", styles_json(&context)?);
        return Ok(());
    }

    print_tokens(&context);
    Ok(())
}

/// Resolved style of every component kind, keyed by kind name.
fn styles_json(context: &DesignSystemContext<'_>) -> Result<String> {
    let styles: BTreeMap<&str, _> = ComponentKind::ALL
        .into_iter()
        .map(|kind| (kind.as_str(), context.resolve_pattern(kind.as_str())))
        .collect();
    Ok(serde_json::to_string_pretty(&styles)?)
}

fn print_tokens(context: &DesignSystemContext<'_>) {
    let system = context.system();
    let foundations = &system.foundations;

    println!("{} {}", system.name.cyan().bold(), format!("({} · {})", system.id, context.theme().name).as_str().dimmed());

    output::print_section("Spacing");
    for step in foundations.spacing.scale.keys() {
        output::print_field(&step.to_string(), &context.spacing(*step));
    }

    output::print_section("Border Radius");
    for name in foundations.border_radius.keys() {
        output::print_field(name, &context.border_radius(name));
    }

    output::print_section("Shadows");
    for name in foundations.shadows.keys() {
        output::print_field(name, &context.shadow(name));
    }

    output::print_section("Borders");
    for name in foundations.borders.colors.keys() {
        output::print_field(name, &context.border(name));
    }

    output::print_section("Font Weights");
    for name in foundations.typography.font_weights.keys() {
        output::print_field(name, &context.font_weight(name).to_string());
    }

    output::print_section("Components");
    let rows: Vec<Vec<String>> = ComponentKind::ALL
        .into_iter()
        .map(|kind| {
            let style = context.resolve_pattern(kind.as_str());
            vec![
                kind.to_string(),
                style.variant.unwrap_or_else(|| "-".to_string()),
                style.padding,
                style.border_radius,
                style.font_weight.to_string(),
                style.border,
            ]
        })
        .collect();
    output::print_table(&["Kind", "Variant", "Padding", "Radius", "Weight", "Border"], &rows);
}
