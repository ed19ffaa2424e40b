//! Command-line interface for valet.
//!
//! This module provides the CLI structure for the `valetctl` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, ShiftCommand, StatsCommand};

use crate::logging::Verbosity;

/// valetctl - Inspect valet-parking shifts
///
/// Builds a store from configuration (optionally seeded with demo data) and
/// reports on its shifts, cars and staff.
#[derive(Debug, Parser)]
#[command(name = "valetctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fixed seed for demo data (overrides config)
    #[arg(long, global = true, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show shifts and their cars
    Shift(ShiftCommand),

    /// Show car and staff statistics
    Stats(StatsCommand),

    /// Check that every car was parked by someone on its shift
    Validate,

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cli_with(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            seed: None,
            verbose,
            quiet,
            command: Command::Validate,
        }
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "valetctl");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(cli_with(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli_with(3, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli_with(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli_with(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli_with(2, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_shift() {
        let cli = Cli::try_parse_from(["valetctl", "shift", "--active"]).unwrap();
        match cli.command {
            Command::Shift(cmd) => {
                assert!(cmd.active);
                assert!(!cmd.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_stats_json() {
        let cli = Cli::try_parse_from(["valetctl", "stats", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::Stats(StatsCommand { json: true })));
    }

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from(["valetctl", "validate"]).unwrap();
        assert!(matches!(cli.command, Command::Validate));
    }

    #[test]
    fn test_parse_config_validate_with_file() {
        let cli =
            Cli::try_parse_from(["valetctl", "config", "validate", "/tmp/valet.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: Some(_) })
        ));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "valetctl", "stats", "--seed", "42", "-c", "/custom/config.toml", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["valetctl"]).is_err());
    }
}
