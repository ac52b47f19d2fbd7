//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod list;
pub mod preset;
pub mod schema;
pub mod theme;
pub mod tokens;

/// Architect - UI template and design token tooling
#[derive(Parser)]
#[command(name = "architect")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory (defaults to current directory)
    #[arg(short, long, global = true, env = "ARCHITECT_PROJECT")]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List design systems, themes, typography, layouts, presets or templates
    List(list::ListArgs),

    /// Show the resolved selection of a preset
    Preset(preset::PresetArgs),

    /// Show resolved tokens and component styles of a design system
    Tokens(tokens::TokensArgs),

    /// Generate the theme file and template metadata
    Theme(theme::ThemeArgs),

    /// Check shipped registries for dangling references
    Check,

    /// Print the JSON Schema of the customization input
    Schema,
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let project_dir = match self.project {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };

        match self.command {
            Commands::List(args) => list::execute(args),
            Commands::Preset(args) => preset::execute(args),
            Commands::Tokens(args) => tokens::execute(args),
            Commands::Theme(args) => theme::execute(args, &project_dir),
            Commands::Check => check::execute(),
            Commands::Schema => schema::execute(),
        }
    }
}
