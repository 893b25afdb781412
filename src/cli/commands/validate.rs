//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the pii-setup configuration file.

use super::{EXIT_CONFIG, EXIT_OK};
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after applying overrides
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Remote Store: {}", config.remote.base_url);
        match config.remote.timeout_seconds {
            Some(secs) => println!("  Request Timeout: {secs}s"),
            None => println!("  Request Timeout: transport default"),
        }
        println!(
            "  Connect Timeout: {}s",
            config.remote.connect_timeout_seconds
        );
        println!("  TLS Verify: {}", config.remote.tls_verify);
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();
        Ok(EXIT_OK)
    }
}
