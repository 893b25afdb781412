//! CLI command implementations
//!
//! Every command returns its process exit code:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | success |
//! | 2 | configuration error |
//! | 4 | remote store or operation failure |
//! | 5 | fatal error |

pub mod add;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod validate;

use crate::adapters::remote::PiiApiClient;
use crate::config::load_config_or_default;
use crate::core::{ConfigurationStore, ConsoleNotifier};
use crate::domain::{FieldUpdate, PiiCategory, PiiConfigurationFormData, SensitivityLevel};
use clap::Args;
use std::sync::Arc;

pub const EXIT_OK: i32 = 0;
pub const EXIT_CONFIG: i32 = 2;
pub const EXIT_REMOTE: i32 = 4;
pub const EXIT_FATAL: i32 = 5;

/// Field values shared by `add` and `edit`; unset flags leave the field alone
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// PII category, e.g. "Contact Information"
    #[arg(long)]
    pub category: Option<PiiCategory>,

    /// Data element name
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Sensitivity level (High, Medium, Low)
    #[arg(long)]
    pub sensitivity: Option<SensitivityLevel>,

    /// Whether masking is required (true/false)
    #[arg(long)]
    pub masking: Option<bool>,

    /// Whether encryption is required (true/false)
    #[arg(long)]
    pub encryption: Option<bool>,

    #[arg(long)]
    pub access_control: Option<String>,

    #[arg(long)]
    pub retention: Option<String>,

    #[arg(long)]
    pub purpose: Option<String>,
}

impl FieldArgs {
    /// One update per flag that was given, in form order
    pub fn updates(&self) -> Vec<FieldUpdate> {
        let mut updates = Vec::new();
        if let Some(category) = &self.category {
            updates.push(FieldUpdate::PiiCategory(Some(category.clone())));
        }
        if let Some(name) = &self.name {
            updates.push(FieldUpdate::DataElementName(name.clone()));
        }
        if let Some(description) = &self.description {
            updates.push(FieldUpdate::Description(description.clone()));
        }
        if let Some(level) = &self.sensitivity {
            updates.push(FieldUpdate::SensitivityLevel(level.clone()));
        }
        if let Some(masking) = self.masking {
            updates.push(FieldUpdate::MaskingRequired(masking));
        }
        if let Some(encryption) = self.encryption {
            updates.push(FieldUpdate::EncryptionRequired(encryption));
        }
        if let Some(access) = &self.access_control {
            updates.push(FieldUpdate::AccessControlLevel(access.clone()));
        }
        if let Some(retention) = &self.retention {
            updates.push(FieldUpdate::RetentionPolicy(retention.clone()));
        }
        if let Some(purpose) = &self.purpose {
            updates.push(FieldUpdate::Purpose(purpose.clone()));
        }
        updates
    }
}

/// Builds a store over the configured remote, without loading it
///
/// Prints the failure and returns the exit code when the configuration or
/// client cannot be set up.
pub(crate) fn build_store(config_path: &str) -> Result<ConfigurationStore, i32> {
    let config = load_config_or_default(config_path).map_err(|e| {
        println!("❌ Failed to load configuration");
        println!("   Error: {e}");
        EXIT_CONFIG
    })?;

    let client = PiiApiClient::new(&config.remote).map_err(|e| {
        println!("❌ Failed to create API client");
        println!("   Error: {e}");
        EXIT_CONFIG
    })?;

    tracing::debug!(base_url = %config.remote.base_url, "Remote store configured");
    Ok(ConfigurationStore::new(
        Arc::new(client),
        Arc::new(ConsoleNotifier),
    ))
}

/// Builds a store and performs the initial load
///
/// A failed load is reported by the store itself and mapped to
/// [`EXIT_REMOTE`].
pub(crate) async fn open_store(config_path: &str) -> Result<ConfigurationStore, i32> {
    let store = build_store(config_path)?;
    store.refresh().await;
    match store.error() {
        Some(error) => {
            println!("   Error: {error}");
            Err(EXIT_REMOTE)
        }
        None => Ok(store),
    }
}

/// Prints the required fields that are still blank
pub(crate) fn warn_missing(form: &PiiConfigurationFormData) {
    let missing = form.missing_required();
    if !missing.is_empty() {
        let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
        println!("⚠️  Required fields left blank: {}", labels.join(", "));
    }
}
