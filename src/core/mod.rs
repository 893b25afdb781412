//! Core configuration workflow
//!
//! The pieces the shell composes to manage PII configurations:
//!
//! - [`store`] - the cached configuration list and its four operations
//! - [`dialog`] - add/edit scratch buffer and submission lifecycle
//! - [`table`] - list rendering and per-row delete tracking
//! - [`notify`] - best-effort user notifications
//!
//! # Workflow
//!
//! 1. **Activate**: build a [`ConfigurationStore`], which loads the list once
//! 2. **Render**: hand store snapshots to [`ConfigurationTable::view`]
//! 3. **Edit**: open a [`DialogController`], apply field updates, submit
//!    through [`ConfigurationStore::add`] or [`ConfigurationStore::update`]
//! 4. **Delete**: confirm, then [`ConfigurationTable::delete`]
//!
//! # Example
//!
//! ```rust,no_run
//! use pii_setup::adapters::remote::PiiApiClient;
//! use pii_setup::config::RemoteConfig;
//! use pii_setup::core::{ConfigurationStore, DialogController, DialogProps, NoopNotifier};
//! use pii_setup::domain::FieldUpdate;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = Arc::new(PiiApiClient::new(&RemoteConfig::default())?);
//! let store = ConfigurationStore::activate(service, Arc::new(NoopNotifier)).await;
//!
//! let mut dialog = DialogController::new();
//! dialog.sync(DialogProps::add());
//! dialog.update_field(FieldUpdate::DataElementName("Email".to_string()));
//!
//! let store = &store;
//! dialog.submit(|form| async move { store.add(&form).await }).await;
//! # Ok(())
//! # }
//! ```

pub mod dialog;
pub mod notify;
pub mod store;
pub mod table;

#[cfg(test)]
pub(crate) mod test_support;

pub use dialog::{DialogController, DialogPhase, DialogProps, SubmitOutcome};
pub use notify::{ConsoleNotifier, NoopNotifier, Notification, NotificationQueue, Notifier};
pub use store::{ConfigurationStore, StoreSnapshot};
pub use table::{Cell, ConfigurationTable, DeleteConfirmation, TableRow, TableView};
