//! External system integrations.
//!
//! - [`remote`] - REST store holding the PII configuration collection
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind traits so the core can be
//! tested with in-memory implementations:
//!
//! ```rust,no_run
//! use pii_setup::adapters::remote::{ConfigurationService, PiiApiClient};
//! use pii_setup::config::RemoteConfig;
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service: Arc<dyn ConfigurationService> = Arc::new(PiiApiClient::new(&RemoteConfig::default())?);
//! # Ok(())
//! # }
//! ```

pub mod remote;
