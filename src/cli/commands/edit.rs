//! Edit command implementation
//!
//! This module implements the `edit` command: it seeds an edit dialog from
//! the stored record, applies only the given flags and submits the result.

use super::{open_store, warn_missing, FieldArgs, EXIT_OK, EXIT_REMOTE};
use crate::core::{DialogController, DialogProps, SubmitOutcome};
use crate::domain::ConfigurationId;
use clap::Args;

/// Arguments for the edit command
#[derive(Args, Debug)]
pub struct EditArgs {
    /// ID of the configuration to edit
    pub id: ConfigurationId,

    #[command(flatten)]
    pub fields: FieldArgs,
}

impl EditArgs {
    /// Execute the edit command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(configuration_id = %self.id, "Editing PII configuration");

        let store = match open_store(config_path).await {
            Ok(store) => store,
            Err(code) => return Ok(code),
        };

        let Some(existing) = store.find(&self.id) else {
            println!("❌ Configuration not found: {}", self.id);
            return Ok(EXIT_REMOTE);
        };

        let mut dialog = DialogController::new();
        dialog.sync(DialogProps::edit(&existing));
        println!("📝 {}: {}", dialog.title(), existing.data_element_name);

        let updates = self.fields.updates();
        if updates.is_empty() {
            println!("Nothing to change");
            return Ok(EXIT_OK);
        }
        for update in updates {
            dialog.update_field(update);
        }
        warn_missing(dialog.form());

        let store = &store;
        let id = &self.id;
        let outcome = dialog
            .submit(|form| async move { store.update(id, &form).await })
            .await;

        Ok(match outcome {
            SubmitOutcome::Closed => EXIT_OK,
            SubmitOutcome::StayOpen | SubmitOutcome::Ignored => EXIT_REMOTE,
        })
    }
}
