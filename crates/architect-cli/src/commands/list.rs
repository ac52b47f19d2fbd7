//! Registry listing command.

use anyhow::Result;
use clap::{Args, ValueEnum};

use architect_core::design::list_design_systems;
use architect_core::layout::list_layouts;
use architect_core::preset::list_presets;
use architect_core::template::list_templates;
use architect_core::theme::{list_themes, SemanticRole};
use architect_core::typography::list_typography;

use crate::output;

#[derive(Args)]
pub struct ListArgs {
    /// Registry to list
    #[arg(value_enum)]
    pub kind: ListKind,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ListKind {
    Systems,
    Themes,
    Typography,
    Layouts,
    Presets,
    Templates,
}

pub fn execute(args: ListArgs) -> Result<()> {
    match args.kind {
        ListKind::Systems => {
            let rows: Vec<Vec<String>> = list_design_systems()
                .iter()
                .map(|s| vec![s.id.clone(), s.name.clone(), s.vendor.clone(), s.description.clone()])
                .collect();
            output::print_table(&["ID", "Name", "Vendor", "Description"], &rows);
        }
        ListKind::Themes => {
            for theme in list_themes() {
                let swatches: String = SemanticRole::ALL
                    .into_iter()
                    .filter_map(|role| theme.color(role))
                    .map(|value| output::swatch(value).to_string())
                    .collect();
                println!("{:<10} {:<16} {}", theme.id, theme.name, swatches);
            }
        }
        ListKind::Typography => {
            let rows: Vec<Vec<String>> = list_typography()
                .iter()
                .map(|t| vec![t.id.clone(), t.name.clone(), format!("{}px", t.font_size), t.font_family.clone()])
                .collect();
            output::print_table(&["ID", "Name", "Size", "Font Stack"], &rows);
        }
        ListKind::Layouts => {
            let rows: Vec<Vec<String>> = list_layouts()
                .iter()
                .map(|l| {
                    let slots: Vec<&str> = l.slots.iter().map(|s| s.as_str()).collect();
                    vec![l.id.clone(), l.name.clone(), l.category.clone(), slots.join(", ")]
                })
                .collect();
            output::print_table(&["ID", "Name", "Category", "Slots"], &rows);
        }
        ListKind::Presets => {
            let rows: Vec<Vec<String>> = list_presets()
                .iter()
                .map(|p| {
                    vec![
                        p.id.clone(),
                        p.design_system.clone(),
                        p.layout.clone(),
                        p.theme.clone(),
                        p.typography.clone(),
                        p.navigation_style.to_string(),
                    ]
                })
                .collect();
            output::print_table(&["ID", "System", "Layout", "Theme", "Typography", "Navigation"], &rows);
        }
        ListKind::Templates => {
            let rows: Vec<Vec<String>> = list_templates()
                .iter()
                .map(|t| {
                    vec![
                        t.id.clone(),
                        t.framework().display_name().to_string(),
                        t.design_system.clone(),
                        t.description.clone(),
                    ]
                })
                .collect();
            output::print_table(&["ID", "Framework", "System", "Description"], &rows);
        }
    }
    Ok(())
}
