//! CLI interface and argument parsing
//!
//! This module provides the command-line shell for pii-setup using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// pii-setup - PII configuration management
#[derive(Parser, Debug)]
#[command(name = "pii-setup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "pii-setup.toml", env = "PII_SETUP_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PII_SETUP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all PII configurations
    List(commands::list::ListArgs),

    /// Add a new PII configuration
    Add(commands::add::AddArgs),

    /// Edit an existing PII configuration
    Edit(commands::edit::EditArgs),

    /// Delete a PII configuration
    Delete(commands::delete::DeleteArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PiiCategory, SensitivityLevel};

    #[test]
    fn test_cli_parse_list() {
        let cli = Cli::parse_from(["pii-setup", "list"]);
        assert_eq!(cli.config, "pii-setup.toml");
        assert!(matches!(cli.command, Commands::List(ref args) if !args.json));
    }

    #[test]
    fn test_cli_parse_with_config_and_log_level() {
        let cli = Cli::parse_from([
            "pii-setup",
            "--config",
            "custom.toml",
            "--log-level",
            "debug",
            "list",
            "--json",
        ]);
        assert_eq!(cli.config, "custom.toml");
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_add_fields() {
        let cli = Cli::parse_from([
            "pii-setup",
            "add",
            "--category",
            "contact information",
            "--name",
            "Email",
            "--sensitivity",
            "High",
            "--masking",
            "true",
        ]);
        let Commands::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.fields.category, Some(PiiCategory::ContactInformation));
        assert_eq!(args.fields.name.as_deref(), Some("Email"));
        assert_eq!(args.fields.sensitivity, Some(SensitivityLevel::High));
        assert_eq!(args.fields.masking, Some(true));
        assert_eq!(args.fields.encryption, None);
    }

    #[test]
    fn test_cli_rejects_unknown_category() {
        let result = Cli::try_parse_from(["pii-setup", "add", "--category", "Shoe Size"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_edit() {
        let cli = Cli::parse_from(["pii-setup", "edit", "7", "--purpose", "Billing"]);
        let Commands::Edit(args) = cli.command else {
            panic!("expected edit");
        };
        assert_eq!(args.id.as_str(), "7");
        assert_eq!(args.fields.purpose.as_deref(), Some("Billing"));
    }

    #[test]
    fn test_cli_parse_delete_with_yes() {
        let cli = Cli::parse_from(["pii-setup", "delete", "7", "--yes"]);
        assert!(matches!(cli.command, Commands::Delete(ref args) if args.yes));
    }

    #[test]
    fn test_cli_rejects_blank_id() {
        assert!(Cli::try_parse_from(["pii-setup", "delete", " "]).is_err());
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["pii-setup", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["pii-setup", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
