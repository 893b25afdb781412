//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_CONFIG, EXIT_FATAL, EXIT_OK};
use crate::config::DEFAULT_BASE_URL;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "pii-setup.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing pii-setup configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Point remote.base_url at your configuration store");
                println!("  2. Validate configuration: pii-setup validate-config");
                println!("  3. List configurations: pii-setup list");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        format!(
            r#"# pii-setup Configuration File
# PII configuration management

[application]
log_level = "info"

[remote]
base_url = "{DEFAULT_BASE_URL}"
connect_timeout_seconds = 30
tls_verify = true

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
json_console = false
"#
        )
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        format!(
            r#"# pii-setup Configuration File
# PII configuration management
#
# Any value may reference an environment variable with ${{VAR}} syntax.
# Every setting can also be overridden with PII_SETUP_<SECTION>_<KEY>,
# e.g. PII_SETUP_REMOTE_BASE_URL.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Remote Store
# ============================================================================
[remote]
# Collection endpoint holding the PII configuration records
base_url = "{DEFAULT_BASE_URL}"

# Whole-request timeout in seconds; omit to use the transport default
# timeout_seconds = 30

# Connection timeout in seconds
connect_timeout_seconds = 30

# TLS/SSL verification
tls_verify = true

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable local file logging (JSON lines)
local_enabled = false

# Local log directory
local_path = "logs"

# Log rotation (daily, hourly or never)
local_rotation = "daily"

# Emit console logs as JSON
json_console = false
"#
        )
    }
}
