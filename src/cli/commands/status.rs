//! Status command implementation
//!
//! This module implements the `status` command, which reports the saved
//! progress cursor and the size of the accumulated dataset.

use crate::config::load_config;
use crate::core::state::StateManager;
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug, Clone, Default)]
pub struct StatusArgs {}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Checking export status");

        println!("Export Status");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(e.exit_code());
            }
        };

        let state_manager = StateManager::from_config(&config);

        println!("  Table: {}", config.table_id);
        println!("  Dataset file: {}", state_manager.dataset_location());
        println!("  Status file: {}", state_manager.cursor_location());

        let cursor = match state_manager.load_cursor().await {
            Ok(c) => c,
            Err(e) => {
                println!("Failed to read status file");
                println!("   Error: {e}");
                return Ok(e.exit_code());
            }
        };

        match cursor {
            Some(cursor) => println!("  Next page: {cursor}"),
            None => println!("  Next page: {} (no status file yet)", config.starting_page),
        }

        let dataset = match state_manager.load_dataset().await {
            Ok(d) => d,
            Err(e) => {
                println!("Failed to read dataset file");
                println!("   Error: {e}");
                return Ok(e.exit_code());
            }
        };

        println!("  Records stored: {}", dataset.len());
        println!();

        if cursor.is_none() && dataset.is_empty() {
            println!("No export history found.");
            println!("Run 'baserow-dump export' to start exporting data.");
        }

        Ok(0)
    }
}
