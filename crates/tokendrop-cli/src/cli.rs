//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tokendrop CLI - Evaluate a token claim storefront against chain state.
#[derive(Debug, Parser)]
#[command(name = "tokendrop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "TOKENDROP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (status only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the full storefront state for a fixture
    Status(StatusArgs),

    /// Show the price of a quantity
    Quote(StatusArgs),

    /// Refresh from a fixture on an interval and print every change
    Watch(WatchArgs),

    /// Simulate a claim (dry run)
    Claim(StatusArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments shared by the one-shot commands.
#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Chain-state fixture (JSON or TOML)
    pub fixture: PathBuf,

    /// Requested quantity, as typed into the quantity field
    #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
    pub quantity: String,
}

/// Arguments for the watch command.
#[derive(Debug, Parser)]
pub struct WatchArgs {
    /// Chain-state fixture (JSON or TOML), re-read on every refresh
    pub fixture: PathBuf,

    /// Requested quantity, as typed into the quantity field
    #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
    pub quantity: String,

    /// Stop after this many refreshes (runs until Ctrl+C otherwise)
    #[arg(long)]
    pub cycles: Option<usize>,

    /// Refresh interval in seconds (overrides configuration)
    #[arg(short, long)]
    pub interval: Option<u64>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_command() {
        let cli = Cli::parse_from(["tokendrop", "status", "chain.toml", "-q", "3"]);
        match cli.command {
            Command::Status(args) => {
                assert_eq!(args.fixture, PathBuf::from("chain.toml"));
                assert_eq!(args.quantity, "3");
            }
            _ => panic!("Expected Status command"),
        }
    }

    #[test]
    fn test_negative_quantity_is_a_value() {
        let cli = Cli::parse_from(["tokendrop", "quote", "chain.toml", "--quantity", "-4"]);
        match cli.command {
            Command::Quote(args) => assert_eq!(args.quantity, "-4"),
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_watch_command() {
        let cli = Cli::parse_from(["tokendrop", "watch", "chain.json", "--cycles", "2", "-i", "1"]);
        match cli.command {
            Command::Watch(args) => {
                assert_eq!(args.cycles, Some(2));
                assert_eq!(args.interval, Some(1));
                assert_eq!(args.quantity, "1");
            }
            _ => panic!("Expected Watch command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["tokendrop", "config", "show", "--format", "json", "--no-color"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.no_color);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs {
                action: ConfigAction::Show
            })
        ));
    }

    #[test]
    fn test_missing_fixture_is_rejected() {
        assert!(Cli::try_parse_from(["tokendrop", "status"]).is_err());
    }
}
