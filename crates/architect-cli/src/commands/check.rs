//! Registry consistency check.

use anyhow::{bail, Result};
use colored::Colorize;

use architect_core::design::{find_design_system, list_design_systems, unresolved_references};
use architect_core::layout::find_layout;
use architect_core::preset::list_presets;
use architect_core::template::list_templates;
use architect_core::theme::{find_theme, list_themes};
use architect_core::typography::find_typography;

pub fn execute() -> Result<()> {
    let mut problems: Vec<String> = Vec::new();

    for system in list_design_systems() {
        let missing = unresolved_references(system);
        if missing.is_empty() {
            println!("{} design system {}", "✓".green().bold(), system.id);
        }
        problems.extend(missing.iter().map(ToString::to_string));
    }

    for theme in list_themes() {
        let missing = theme.missing_roles();
        if missing.is_empty() {
            println!("{} theme {}", "✓".green().bold(), theme.id);
        } else {
            let roles: Vec<&str> = missing.iter().map(|r| r.as_str()).collect();
            problems.push(format!("theme {} is missing {}", theme.id, roles.join(", ")));
        }
    }

    for preset in list_presets() {
        let mut unresolved = Vec::new();
        if find_design_system(&preset.design_system).is_none() {
            unresolved.push(format!("design system '{}'", preset.design_system));
        }
        if find_layout(&preset.layout).is_none() {
            unresolved.push(format!("layout '{}'", preset.layout));
        }
        if find_theme(&preset.theme).is_none() {
            unresolved.push(format!("theme '{}'", preset.theme));
        }
        if find_typography(&preset.typography).is_none() {
            unresolved.push(format!("typography '{}'", preset.typography));
        }
        if unresolved.is_empty() {
            println!("{} preset {}", "✓".green().bold(), preset.id);
        } else {
            problems.push(format!("preset {} pins unknown {}", preset.id, unresolved.join(", ")));
        }
    }

    for template in list_templates() {
        if find_design_system(&template.design_system).is_none() {
            problems.push(format!(
                "template {} uses unknown design system '{}'",
                template.id, template.design_system
            ));
        } else {
            println!("{} template {}", "✓".green().bold(), template.id);
        }
    }

    if !problems.is_empty() {
        println!();
        for problem in &problems {
            println!("{} {}", "✗".red().bold(), problem);
        }
        bail!("{} problem(s) found", problems.len());
    }

    println!("\n{}", "All registries are consistent.".green().bold());
    Ok(())
}
