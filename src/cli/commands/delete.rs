//! Delete command implementation
//!
//! This module implements the `delete` command. Deleting is two-step: the
//! confirmation is printed and must be answered unless `--yes` is given.

use super::{open_store, EXIT_FATAL, EXIT_OK, EXIT_REMOTE};
use crate::core::{ConfigurationTable, DeleteConfirmation};
use crate::domain::ConfigurationId;
use clap::Args;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// ID of the configuration to delete
    pub id: ConfigurationId,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl DeleteArgs {
    /// Execute the delete command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(configuration_id = %self.id, "Deleting PII configuration");

        let store = match open_store(config_path).await {
            Ok(store) => store,
            Err(code) => return Ok(code),
        };

        let Some(existing) = store.find(&self.id) else {
            println!("❌ Configuration not found: {}", self.id);
            return Ok(EXIT_REMOTE);
        };

        let confirmation = DeleteConfirmation::for_record(&existing);
        println!("🗑️  {}", confirmation.title);
        println!("{}", confirmation.message);

        if !self.yes {
            let mut stdin = BufReader::new(tokio::io::stdin());
            match confirm(&mut stdin).await {
                Ok(true) => {}
                Ok(false) => {
                    println!("Cancelled");
                    return Ok(EXIT_OK);
                }
                Err(e) => {
                    println!("❌ Failed to read confirmation");
                    println!("   Error: {e}");
                    return Ok(EXIT_FATAL);
                }
            }
        }

        let table = ConfigurationTable::new();
        match table.delete(&store, &self.id).await {
            Ok(_) => Ok(EXIT_OK),
            Err(e) => {
                tracing::debug!(error = %e, "Delete rejected");
                Ok(EXIT_REMOTE)
            }
        }
    }
}

/// Asks for a yes/no answer; anything but "y" or "yes" declines
async fn confirm<R>(input: &mut R) -> std::io::Result<bool>
where
    R: AsyncBufRead + Unpin,
{
    println!("Delete? [y/N]");
    let mut answer = String::new();
    input.read_line(&mut answer).await?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("y\n", true; "short yes")]
    #[test_case("YES\n", true; "upper yes")]
    #[test_case("n\n", false; "no")]
    #[test_case("\n", false; "empty answer")]
    #[test_case("", false; "end of input")]
    #[tokio::test]
    async fn test_confirm_answers(input: &str, expected: bool) {
        let mut reader = input.as_bytes();
        assert_eq!(confirm(&mut reader).await.unwrap(), expected);
    }
}
