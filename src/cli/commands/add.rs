//! Add command implementation
//!
//! This module implements the `add` command: it fills an add dialog from
//! the given flags and submits it to the remote store.

use super::{build_store, warn_missing, FieldArgs, EXIT_OK, EXIT_REMOTE};
use crate::core::{DialogController, DialogProps};
use clap::Args;

/// Arguments for the add command
#[derive(Args, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: FieldArgs,
}

impl AddArgs {
    /// Execute the add command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Adding PII configuration");

        let store = match build_store(config_path) {
            Ok(store) => store,
            Err(code) => return Ok(code),
        };

        let mut dialog = DialogController::new();
        dialog.sync(DialogProps::add());
        println!("📝 {}", dialog.title());

        for update in self.fields.updates() {
            dialog.update_field(update);
        }
        warn_missing(dialog.form());

        let Some(form) = dialog.begin_submit() else {
            return Ok(EXIT_REMOTE);
        };
        println!("   {}", dialog.submit_label());
        let result = store.add(&form).await;
        dialog.finish_submit(result.is_ok());

        match result {
            Ok(record) => {
                println!("   ID: {}", record.id);
                Ok(EXIT_OK)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Add rejected");
                Ok(EXIT_REMOTE)
            }
        }
    }
}
