//! Core business logic.
//!
//! # Modules
//!
//! - [`export`] - Page sequence, pacing, and the driver loop
//! - [`state`] - Dataset accumulation and the progress cursor
//!
//! # Export Workflow
//!
//! 1. **Start**: Use the configured page, or the saved cursor when resuming
//! 2. **Fetch**: Request one page of rows
//! 3. **Stop**: End on the first page without records
//! 4. **Accumulate**: Append the page's records to the dataset
//! 5. **Checkpoint**: Save the next page number
//! 6. **Report**: Generate export summary
//!
//! # Example
//!
//! ```rust,no_run
//! use baserow_dump::config::load_config;
//! use baserow_dump::core::export::ExportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("config.txt")?;
//!
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! let coordinator = ExportCoordinator::new(&config, shutdown_rx)?;
//!
//! let summary = coordinator.execute_export().await?;
//! println!("Records exported: {}", summary.records_exported);
//! println!("Next page: {}", summary.next_page);
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod state;
