//! Configuration management.
//!
//! TOML configuration with:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `PII_SETUP_<SECTION>_<KEY>` environment overrides
//! - Defaults for every setting
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [remote]
//! base_url = "https://6851ae668612b47a2c0af27f.mockapi.io/pii/identifiers/PII"
//! timeout_seconds = 30
//!
//! [logging]
//! local_enabled = true
//! local_path = "logs"
//! local_rotation = "daily"
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use pii_setup::config::load_config_or_default;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default("pii-setup.toml")?;
//! println!("Remote store: {}", config.remote.base_url);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, LoggingConfig, PiiSetupConfig, RemoteConfig, DEFAULT_BASE_URL};
