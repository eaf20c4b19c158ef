//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Baserow Dump - incremental table exporter
#[derive(Parser, Debug)]
#[command(name = "baserow-dump")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.txt", env = "BASEROW_DUMP_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "BASEROW_DUMP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Also write JSON logs to this directory
    #[arg(long, env = "BASEROW_DUMP_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Subcommand to execute (defaults to export)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The subcommand to run, `export` with default flags when none was given
    pub fn command_or_default(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Export(commands::export::ExportArgs::default()))
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Export table rows into the dataset file
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Show the progress cursor and dataset size
    Status(commands::status::StatusArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_export() {
        let cli = Cli::parse_from(["baserow-dump"]);
        assert_eq!(cli.config, "config.txt");
        assert!(cli.command.is_none());
        match cli.command_or_default() {
            Commands::Export(args) => {
                assert!(!args.resume);
                assert!(!args.dry_run);
                assert!(args.page_delay_ms.is_none());
            }
            other => panic!("Expected export, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["baserow-dump", "export", "--resume", "--page-delay-ms", "250"]);
        match cli.command_or_default() {
            Commands::Export(args) => {
                assert!(args.resume);
                assert_eq!(args.page_delay_ms, Some(250));
            }
            other => panic!("Expected export, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["baserow-dump", "--config", "custom.txt", "export"]);
        assert_eq!(cli.config, "custom.txt");
    }

    #[test]
    fn test_cli_parse_with_log_options() {
        let cli = Cli::parse_from([
            "baserow-dump",
            "--log-level",
            "debug",
            "--log-dir",
            "logs",
            "status",
        ]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert_eq!(cli.log_dir, Some("logs".to_string()));
        assert!(matches!(cli.command, Some(Commands::Status(_))));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["baserow-dump", "validate-config"]);
        assert!(matches!(cli.command, Some(Commands::ValidateConfig(_))));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["baserow-dump", "init", "--force"]);
        match cli.command {
            Some(Commands::Init(args)) => assert!(args.force),
            other => panic!("Expected init, got {other:?}"),
        }
    }
}
