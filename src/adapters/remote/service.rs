//! Remote store service trait and the uniform response envelope
//!
//! [`ConfigurationService`] is the only way the rest of the crate reaches the
//! remote store. Implementations never return an error past this boundary:
//! every failure is folded into [`ApiResponse::Failure`] with a human-readable
//! message.

use crate::domain::{ConfigurationId, PiiConfiguration, PiiConfigurationFormData, RemoteError};
use async_trait::async_trait;

/// Fallback message when listing fails below HTTP
pub const FETCH_FAILED: &str = "Failed to fetch configurations";
/// Fallback message when creating fails below HTTP
pub const CREATE_FAILED: &str = "Failed to create configuration";
/// Fallback message when updating fails below HTTP
pub const UPDATE_FAILED: &str = "Failed to update configuration";
/// Fallback message when deleting fails below HTTP
pub const DELETE_FAILED: &str = "Failed to delete configuration";

/// Outcome of a remote store call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    /// The call succeeded; `()` for calls without a payload
    Success(T),
    /// The call failed; carries a message fit for display
    Failure(String),
}

impl<T> ApiResponse<T> {
    /// Folds a remote result into the envelope
    ///
    /// Message rules:
    /// - non-success status: `HTTP error! status: <code>`
    /// - undecodable body: the decoder's message
    /// - transport failure: `fallback`
    pub fn from_result(result: std::result::Result<T, RemoteError>, fallback: &str) -> Self {
        match result {
            Ok(data) => ApiResponse::Success(data),
            Err(e) => {
                let message = match &e {
                    e if e.is_transport() => fallback.to_string(),
                    RemoteError::InvalidResponse(msg) if msg.trim().is_empty() => {
                        fallback.to_string()
                    }
                    e => e.to_string(),
                };
                tracing::error!(error = %e, message = %message, "API Error");
                ApiResponse::Failure(message)
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    /// The payload, when successful
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Success(data) => Some(data),
            ApiResponse::Failure(_) => None,
        }
    }

    /// The failure message, when failed
    pub fn error(&self) -> Option<&str> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Failure(msg) => Some(msg),
        }
    }

    pub fn into_result(self) -> std::result::Result<T, String> {
        match self {
            ApiResponse::Success(data) => Ok(data),
            ApiResponse::Failure(msg) => Err(msg),
        }
    }
}

/// CRUD access to the remote configuration collection
///
/// # Example
///
/// ```no_run
/// use pii_setup::adapters::remote::{ConfigurationService, PiiApiClient};
/// use pii_setup::config::RemoteConfig;
///
/// # async fn example() -> pii_setup::domain::Result<()> {
/// let client = PiiApiClient::new(&RemoteConfig::default())?;
///
/// match client.list_all().await.into_result() {
///     Ok(records) => println!("{} configurations", records.len()),
///     Err(message) => eprintln!("{message}"),
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ConfigurationService: Send + Sync {
    /// Fetch the full collection, every record normalized
    async fn list_all(&self) -> ApiResponse<Vec<PiiConfiguration>>;

    /// Create a record; the store assigns its id
    async fn create(&self, form: &PiiConfigurationFormData) -> ApiResponse<PiiConfiguration>;

    /// Replace the editable fields of the record identified by `id`
    async fn update(
        &self,
        id: &ConfigurationId,
        form: &PiiConfigurationFormData,
    ) -> ApiResponse<PiiConfiguration>;

    /// Delete the record identified by `id`
    async fn remove(&self, id: &ConfigurationId) -> ApiResponse<()>;

    /// Collection URL this service talks to
    fn base_url(&self) -> &str;

    /// Records the last successful `list_all` dropped for lacking a usable id
    fn skipped_records(&self) -> usize {
        0
    }
}
