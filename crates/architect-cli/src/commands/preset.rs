//! Preset inspection command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use architect_core::preset::get_preset;
use architect_core::Customization;

use crate::output;

#[derive(Args)]
pub struct PresetArgs {
    /// Preset ID
    pub id: String,

    /// Print the customization JSON to paste into the generator input
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: PresetArgs) -> Result<()> {
    let preset = get_preset(&args.id).ok_or_else(|| {
        anyhow::anyhow!("Preset '{}' not found. Run 'architect list presets'.", args.id)
    })?;
    let selection = preset.resolve();

    if args.json {
        println!("{}", Customization::from_selection(&selection).to_json_pretty()?);
        return Ok(());
    }

    println!("{} {}", preset.name.cyan().bold(), format!("({})", preset.id).as_str().dimmed());
    if !preset.description.is_empty() {
        println!("{}", preset.description);
    }

    output::print_section("Selection");
    output::print_field("Design system", &format!("{} ({})", selection.design_system.name, selection.design_system.vendor));
    output::print_field("Layout", &selection.layout.name);
    output::print_field("Theme", &selection.theme.name);
    output::print_field(
        "Typography",
        &format!("{} · {}px", selection.typography.name, selection.typography.font_size),
    );
    output::print_field("Navigation", selection.navigation_style.as_str());

    let plan = selection.layout.plan(selection.navigation_style);
    let slots: Vec<&str> = plan.slots.iter().map(|s| s.as_str()).collect();
    output::print_field("Slots", &slots.join(" → "));

    println!();
    println!("{}", format!("Export with: architect preset {} --json", preset.id).as_str().dimmed());
    Ok(())
}
