// pii-setup - PII Configuration Management
// Copyright (c) 2025 pii-setup Contributors
// Licensed under the MIT License

//! # pii-setup - PII Configuration Management
//!
//! pii-setup maintains a catalog of PII configuration records: which kind of
//! personal data a field holds, how sensitive it is, whether it must be
//! masked or encrypted, and how long it is retained. Records live in a
//! remote REST store; this crate is the client-side workflow over it.
//!
//! ## Architecture
//!
//! pii-setup follows a layered architecture:
//!
//! - [`cli`] - Command-line shell and argument parsing
//! - [`core`] - Configuration store, add/edit dialog, list view
//! - [`adapters`] - The API client for the remote store
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pii_setup::adapters::remote::PiiApiClient;
//! use pii_setup::config::load_config_or_default;
//! use pii_setup::core::{ConfigurationStore, ConfigurationTable, ConsoleNotifier};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("pii-setup.toml")?;
//!     let client = PiiApiClient::new(&config.remote)?;
//!
//!     let store = ConfigurationStore::activate(Arc::new(client), Arc::new(ConsoleNotifier)).await;
//!     print!("{}", ConfigurationTable::new().view(&store.snapshot()).render());
//!     Ok(())
//! }
//! ```
//!
//! ## Consistency
//!
//! The store is the only writer of the cached list. A mutation is applied
//! locally only after the remote call succeeded, so a failed add, update or
//! delete never changes what is displayed:
//!
//! ```rust,no_run
//! use pii_setup::core::ConfigurationStore;
//! use pii_setup::domain::PiiConfigurationFormData;
//!
//! # async fn example(store: &ConfigurationStore) {
//! let before = store.configurations();
//! if store.add(&PiiConfigurationFormData::default()).await.is_err() {
//!     assert_eq!(store.configurations(), before);
//! }
//! # }
//! ```
//!
//! ## Error Handling
//!
//! pii-setup uses the [`domain::PiiSetupError`] type for all errors. The API
//! client never returns it for request failures; those become the
//! [`adapters::remote::ApiResponse::Failure`] envelope instead.
//!
//! ## Logging
//!
//! pii-setup uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(count = 3, "Fetched configurations");
//! warn!(configuration_id = "17", "Record skipped");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
