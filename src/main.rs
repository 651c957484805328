//! QuietRoom CLI - Acoustic Design Workbench
//!
//! Command-line interface for the QuietRoom workbench.

use anyhow::Context;
use clap::Parser;
use log::info;
use tracing_subscriber::EnvFilter;

use quietroom::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("QuietRoom v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("QuietRoom v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> anyhow::Result<()> {
    match cmd {
        Commands::Materials { category } => {
            commands::list_materials(category.as_deref()).context("listing materials")
        }
        Commands::Sources => commands::list_sources().context("listing sound sources"),
        Commands::Concepts => commands::show_concepts().context("showing concepts"),
        Commands::Prompt { design } => commands::print_prompt(&design).context("building prompt"),
        Commands::Preview { design } => commands::preview(&design).context("previewing design"),
        Commands::Analyze {
            design,
            json,
            settings,
        } => commands::analyze(&design, json, settings.as_deref()).context("analysing design"),
    }
}
