//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Shift listing arguments.
#[derive(Debug, Args)]
pub struct ShiftCommand {
    /// Only show cars still parked
    #[arg(short, long)]
    pub active: bool,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Statistics arguments.
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show configuration file path
    Path,

    /// Validate configuration file
    Validate {
        /// Path to config file (defaults to standard location)
        file: Option<PathBuf>,
    },
}
