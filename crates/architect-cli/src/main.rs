//! Architect CLI
//!
//! Browse design system presets and generate UI template theme files for
//! scaffolded projects.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::Cli;

/// Initialize tracing on stderr so JSON printed to stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "architect=debug,architect_core=debug,architect_codegen=debug"
    } else {
        "architect=info,architect_core=info,architect_codegen=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute()
}
