//! List command implementation
//!
//! This module implements the `list` command, which loads every
//! configuration from the remote store and prints it as a table.

use super::{build_store, EXIT_FATAL, EXIT_OK, EXIT_REMOTE};
use crate::core::ConfigurationTable;
use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the records as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Execute the list command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Listing PII configurations");

        let store = match build_store(config_path) {
            Ok(store) => store,
            Err(code) => return Ok(code),
        };
        store.refresh().await;
        let snapshot = store.snapshot();

        if let Some(error) = &snapshot.error {
            println!("⚠️  {error}");
            println!();
        }
        if let Some(notice) = skipped_notice(snapshot.skipped) {
            println!("⚠️  {notice}");
            println!();
        }

        if self.json {
            match serde_json::to_string_pretty(&snapshot.configurations) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    println!("❌ Failed to serialize configurations");
                    println!("   Error: {e}");
                    return Ok(EXIT_FATAL);
                }
            }
        } else {
            println!("PII Configuration Management");
            println!();
            print!("{}", ConfigurationTable::new().view(&snapshot).render());
        }

        Ok(if snapshot.error.is_some() {
            EXIT_REMOTE
        } else {
            EXIT_OK
        })
    }
}

fn skipped_notice(skipped: usize) -> Option<String> {
    match skipped {
        0 => None,
        1 => Some("1 configuration without an id was skipped".to_string()),
        n => Some(format!("{n} configurations without an id were skipped")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, None ; "none skipped")]
    #[test_case(1, Some("1 configuration without an id was skipped") ; "one skipped")]
    #[test_case(3, Some("3 configurations without an id were skipped") ; "several skipped")]
    fn test_skipped_notice(skipped: usize, expected: Option<&str>) {
        assert_eq!(skipped_notice(skipped).as_deref(), expected);
    }

    #[tokio::test]
    async fn test_list_unreachable_store_exits_with_remote_code() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("pii-setup.toml");
        std::fs::write(
            &path,
            "[remote]\nbase_url = \"http://127.0.0.1:1/pii\"\nconnect_timeout_seconds = 2\n",
        )
        .unwrap();

        let code = ListArgs { json: false }
            .execute(path.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, EXIT_REMOTE);
    }
}
