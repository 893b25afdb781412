//! In-memory configuration list and its mutations
//!
//! [`ConfigurationStore`] is the single writer of the cached configuration
//! list. Every change goes through one of four operations, each of which
//! calls the remote store first and patches the cache only once that call
//! has succeeded. Readers get cloned snapshots or subscribe to changes.
//!
//! # Example
//!
//! ```rust,no_run
//! use pii_setup::adapters::remote::PiiApiClient;
//! use pii_setup::config::RemoteConfig;
//! use pii_setup::core::{ConfigurationStore, ConsoleNotifier};
//! use std::sync::Arc;
//!
//! # async fn example() -> pii_setup::domain::Result<()> {
//! let service = Arc::new(PiiApiClient::new(&RemoteConfig::default())?);
//! let store = ConfigurationStore::activate(service, Arc::new(ConsoleNotifier)).await;
//!
//! for config in store.configurations() {
//!     println!("{} - {}", config.id, config.data_element_name);
//! }
//! # Ok(())
//! # }
//! ```

use crate::adapters::remote::ConfigurationService;
use crate::core::notify::{NoopNotifier, Notifier};
use crate::domain::{
    ConfigurationId, PiiConfiguration, PiiConfigurationFormData, PiiSetupError, Result,
};
use crate::{log_error_with_context, log_mutation};
use std::sync::Arc;
use tokio::sync::watch;

const LOAD_FAILED_NOTICE: &str = "Failed to load PII configurations";
const FETCH_FAILED: &str = "Failed to fetch configurations";
const ADD_FAILED: &str = "Failed to add configuration";
const UPDATE_FAILED: &str = "Failed to update configuration";
const DELETE_FAILED: &str = "Failed to delete configuration";

/// Point-in-time view of the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSnapshot {
    /// Records in the order the remote store returned them
    pub configurations: Vec<PiiConfiguration>,
    pub is_loading: bool,
    /// Message from the last failed refresh, cleared when a refresh starts
    pub error: Option<String>,
    /// Records the last successful refresh dropped for lacking an id
    pub skipped: usize,
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            configurations: Vec::new(),
            is_loading: true,
            error: None,
            skipped: 0,
        }
    }
}

/// Owner of the cached configuration list
pub struct ConfigurationStore {
    service: Arc<dyn ConfigurationService>,
    notifier: Arc<dyn Notifier>,
    state: watch::Sender<StoreSnapshot>,
}

impl ConfigurationStore {
    /// Creates a store that has not loaded anything yet
    ///
    /// The initial snapshot is empty and loading.
    pub fn new(service: Arc<dyn ConfigurationService>, notifier: Arc<dyn Notifier>) -> Self {
        let (state, _) = watch::channel(StoreSnapshot::default());
        Self {
            service,
            notifier,
            state,
        }
    }

    /// Creates a store that discards notifications
    pub fn with_service(service: Arc<dyn ConfigurationService>) -> Self {
        Self::new(service, Arc::new(NoopNotifier))
    }

    /// Creates a store and performs the initial refresh
    pub async fn activate(
        service: Arc<dyn ConfigurationService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let store = Self::new(service, notifier);
        store.refresh().await;
        store
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.state.borrow().clone()
    }

    pub fn configurations(&self) -> Vec<PiiConfiguration> {
        self.state.borrow().configurations.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    /// Looks up a cached record by id
    pub fn find(&self, id: &ConfigurationId) -> Option<PiiConfiguration> {
        self.state
            .borrow()
            .configurations
            .iter()
            .find(|c| &c.id == id)
            .cloned()
    }

    /// Receiver that observes every state change
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.state.subscribe()
    }

    /// Reloads the whole list from the remote store
    ///
    /// On success the cached list is replaced wholesale, even by an empty
    /// list. On failure the previous list is kept, `error` is set and an
    /// error notification is raised. Loading is cleared either way.
    pub async fn refresh(&self) {
        self.state.send_modify(|s| {
            s.is_loading = true;
            s.error = None;
        });

        let response = self.service.list_all().await;

        match response.into_result() {
            Ok(configurations) => {
                let skipped = self.service.skipped_records();
                tracing::debug!(
                    count = configurations.len(),
                    skipped,
                    "Configuration list replaced"
                );
                self.state.send_modify(|s| {
                    s.configurations = configurations;
                    s.skipped = skipped;
                    s.is_loading = false;
                });
            }
            Err(message) => {
                let message = non_empty_or(message, FETCH_FAILED);
                log_error_with_context!(message, LOAD_FAILED_NOTICE);
                self.state.send_modify(|s| {
                    s.error = Some(message);
                    s.is_loading = false;
                });
                self.notifier.error(LOAD_FAILED_NOTICE);
            }
        }
    }

    /// Creates a record and appends the stored version to the list
    ///
    /// # Errors
    ///
    /// Returns [`PiiSetupError::Operation`] with the notified message when the
    /// remote store rejects the create; the list is left unchanged.
    pub async fn add(&self, form: &PiiConfigurationFormData) -> Result<PiiConfiguration> {
        let record = self
            .service
            .create(form)
            .await
            .into_result()
            .map_err(|message| self.fail(message, ADD_FAILED))?;

        let mut count = 0;
        self.state.send_modify(|s| {
            s.configurations.push(record.clone());
            count = s.configurations.len();
        });
        log_mutation!("add", record.id, count);

        self.notifier.success("Configuration added successfully");
        Ok(record)
    }

    /// Updates a record and swaps the stored version into place
    ///
    /// Position in the list is preserved; no other entry changes.
    ///
    /// # Errors
    ///
    /// Returns [`PiiSetupError::Operation`] when the remote store rejects the
    /// update; the list is left unchanged.
    pub async fn update(
        &self,
        id: &ConfigurationId,
        form: &PiiConfigurationFormData,
    ) -> Result<PiiConfiguration> {
        let record = self
            .service
            .update(id, form)
            .await
            .into_result()
            .map_err(|message| self.fail(message, UPDATE_FAILED))?;

        let mut count = 0;
        self.state.send_modify(|s| {
            for entry in s.configurations.iter_mut().filter(|c| &c.id == id) {
                *entry = record.clone();
            }
            count = s.configurations.len();
        });
        log_mutation!("update", id, count);

        self.notifier.success("Configuration updated successfully");
        Ok(record)
    }

    /// Deletes a record and drops it from the list
    ///
    /// # Errors
    ///
    /// Returns [`PiiSetupError::Operation`] when the remote store rejects the
    /// delete; the list is left unchanged.
    pub async fn remove(&self, id: &ConfigurationId) -> Result<()> {
        self.service
            .remove(id)
            .await
            .into_result()
            .map_err(|message| self.fail(message, DELETE_FAILED))?;

        let mut count = 0;
        self.state.send_modify(|s| {
            s.configurations.retain(|c| &c.id != id);
            count = s.configurations.len();
        });
        log_mutation!("remove", id, count);

        self.notifier.success("Configuration deleted successfully");
        Ok(())
    }

    fn fail(&self, message: String, fallback: &str) -> PiiSetupError {
        let message = non_empty_or(message, fallback);
        log_error_with_context!(message, fallback);
        self.notifier.error(&message);
        PiiSetupError::Operation(message)
    }
}

fn non_empty_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
