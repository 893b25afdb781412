//! REST implementation of [`ConfigurationService`]
//!
//! Speaks plain JSON to a collection endpoint:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list      | `GET <base>` |
//! | create    | `POST <base>` with the form data |
//! | update    | `PUT <base>/<id>` with the form data |
//! | delete    | `DELETE <base>/<id>` |
//!
//! Any non-success status is a failure; specific codes are not
//! distinguished. Requests are never retried.

use super::normalize::{normalize_records, normalize_single};
use super::service::{
    ApiResponse, ConfigurationService, CREATE_FAILED, DELETE_FAILED, FETCH_FAILED, UPDATE_FAILED,
};
use crate::config::RemoteConfig;
use crate::domain::{
    ConfigurationId, PiiConfiguration, PiiConfigurationFormData, PiiSetupError, RemoteError,
    Result,
};
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Method, Response};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use url::Url;

/// HTTP client for the PII configuration collection
///
/// # Example
///
/// ```no_run
/// use pii_setup::adapters::remote::{ConfigurationService, PiiApiClient};
///
/// # async fn example() -> pii_setup::domain::Result<()> {
/// let client = PiiApiClient::with_base_url("http://localhost:3000/pii")?;
/// let response = client.list_all().await;
/// assert!(response.is_success());
/// # Ok(())
/// # }
/// ```
pub struct PiiApiClient {
    /// Collection URL
    base_url: Url,

    /// HTTP client for making requests
    client: Client,

    /// Records without an id dropped from the last list
    skipped: AtomicUsize,
}

impl PiiApiClient {
    /// Create a client from the remote section of the configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL does not parse or the
    /// HTTP client cannot be built.
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            PiiSetupError::Configuration(format!(
                "Invalid remote base URL '{}': {e}",
                config.base_url
            ))
        })?;

        let mut client_builder = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds));

        if let Some(secs) = config.timeout_seconds {
            client_builder = client_builder.timeout(Duration::from_secs(secs));
        }

        if !config.tls_verify {
            tracing::warn!("TLS certificate verification disabled for remote store");
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().map_err(|e| {
            PiiSetupError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            base_url,
            client,
            skipped: AtomicUsize::new(0),
        })
    }

    /// Create a client with default settings against `base_url`
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::new(&RemoteConfig {
            base_url: base_url.into(),
            ..Default::default()
        })
    }

    /// `<base>/<id>`, with the id percent-encoded as a single path segment
    fn resource_url(&self, id: &ConfigurationId) -> std::result::Result<Url, RemoteError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                RemoteError::InvalidUrl(format!(
                    "'{}' cannot address configuration {id}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&PiiConfigurationFormData>,
    ) -> std::result::Result<Response, RemoteError> {
        tracing::debug!(method = %method, url = %url, "Sending request to remote store");

        let mut request = self
            .client
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json");

        if method == Method::GET {
            request = request.header(CACHE_CONTROL, "no-store");
        }
        if let Some(form) = body {
            request = request.json(form);
        }

        let resp = request.send().await.map_err(RemoteError::from)?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %body, "Remote store rejected request");
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp)
    }

    async fn fetch_all(&self) -> std::result::Result<Vec<PiiConfiguration>, RemoteError> {
        let resp = self.send(Method::GET, self.base_url.clone(), None).await?;
        let raw: serde_json::Value = resp.json().await.map_err(RemoteError::from)?;
        let received = raw.as_array().map_or(0, Vec::len);
        let records = normalize_records(raw)?;
        self.skipped.store(received - records.len(), Ordering::Relaxed);
        Ok(records)
    }

    async fn write_record(
        &self,
        method: Method,
        url: Url,
        form: &PiiConfigurationFormData,
    ) -> std::result::Result<PiiConfiguration, RemoteError> {
        let resp = self.send(method, url, Some(form)).await?;
        let raw: serde_json::Value = resp.json().await.map_err(RemoteError::from)?;
        normalize_single(raw)
    }
}

#[async_trait]
impl ConfigurationService for PiiApiClient {
    async fn list_all(&self) -> ApiResponse<Vec<PiiConfiguration>> {
        let result = self.fetch_all().await;
        if let Ok(records) = &result {
            tracing::info!(count = records.len(), "Fetched configurations");
        }
        ApiResponse::from_result(result, FETCH_FAILED)
    }

    async fn create(&self, form: &PiiConfigurationFormData) -> ApiResponse<PiiConfiguration> {
        let result = self
            .write_record(Method::POST, self.base_url.clone(), form)
            .await;
        if let Ok(record) = &result {
            tracing::info!(configuration_id = %record.id, "Created configuration");
        }
        ApiResponse::from_result(result, CREATE_FAILED)
    }

    async fn update(
        &self,
        id: &ConfigurationId,
        form: &PiiConfigurationFormData,
    ) -> ApiResponse<PiiConfiguration> {
        let result = match self.resource_url(id) {
            Ok(url) => self.write_record(Method::PUT, url, form).await,
            Err(e) => Err(e),
        };
        if result.is_ok() {
            tracing::info!(configuration_id = %id, "Updated configuration");
        }
        ApiResponse::from_result(result, UPDATE_FAILED)
    }

    async fn remove(&self, id: &ConfigurationId) -> ApiResponse<()> {
        let result = match self.resource_url(id) {
            Ok(url) => self.send(Method::DELETE, url, None).await.map(|_| ()),
            Err(e) => Err(e),
        };
        if result.is_ok() {
            tracing::info!(configuration_id = %id, "Deleted configuration");
        }
        ApiResponse::from_result(result, DELETE_FAILED)
    }

    fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn skipped_records(&self) -> usize {
        self.skipped.load(Ordering::Relaxed)
    }
}
