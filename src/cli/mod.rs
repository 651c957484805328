//! CLI Module
//!
//! Command-line interface for the QuietRoom workbench.

pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// QuietRoom - design a soundproof music room and estimate its STC
#[derive(Parser, Debug)]
#[command(name = "quietroom")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List materials, optionally for one category
    #[command(name = "materials")]
    Materials {
        /// wall-layer, insulation, window or door
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List sound sources
    #[command(name = "sources")]
    Sources,

    /// Show the acoustics lessons
    #[command(name = "concepts")]
    Concepts,

    /// Print the prompt that would be sent for a design
    #[command(name = "prompt")]
    Prompt {
        #[command(flatten)]
        design: DesignArgs,
    },

    /// Show the configuration summary and section schematic
    #[command(name = "preview")]
    Preview {
        #[command(flatten)]
        design: DesignArgs,
    },

    /// Estimate the STC of a design
    #[command(name = "analyze")]
    Analyze {
        #[command(flatten)]
        design: DesignArgs,

        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,

        /// JSON settings file (api_key, model, endpoint, timeout_ms)
        #[arg(long)]
        settings: Option<PathBuf>,
    },
}

/// Catalog ids for each slot of a design
#[derive(Args, Debug, Clone, Default)]
pub struct DesignArgs {
    /// Sound source id
    #[arg(long, default_value = "drums")]
    pub source: String,

    /// Outer wall layer id
    #[arg(long)]
    pub outer: Option<String>,

    /// Cavity fill id
    #[arg(long)]
    pub cavity: Option<String>,

    /// Inner wall layer id
    #[arg(long)]
    pub inner: Option<String>,

    /// Door id
    #[arg(long)]
    pub door: Option<String>,

    /// Window id
    #[arg(long)]
    pub window: Option<String>,
}
