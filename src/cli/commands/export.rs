//! Export command implementation
//!
//! This module implements the `export` command, which pages through the
//! configured table into the dataset file.

use crate::config::{load_config, DumpConfig};
use crate::core::export::{ExportCoordinator, ExportSummary};
use crate::log_error_with_context;
use clap::Args;
use tokio::sync::watch;

/// Arguments for the export command
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Continue from the page saved in the status file
    #[arg(long)]
    pub resume: bool,

    /// Dry run mode - fetch pages without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Wait this many milliseconds between page requests
    #[arg(long, value_name = "N")]
    pub page_delay_ms: Option<u64>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting export command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(e.exit_code());
            }
        };

        self.apply_overrides(&mut config);

        if self.dry_run {
            tracing::info!("Dry run mode enabled - no data will be written");
            println!("DRY RUN MODE - No files will be written");
            println!();
        }

        let coordinator = match ExportCoordinator::new(&config, shutdown_signal) {
            Ok(c) => c.with_dry_run(self.dry_run),
            Err(e) => {
                log_error_with_context!(&e, "Failed to create export coordinator");
                eprintln!("Failed to initialize export: {e}");
                return Ok(e.exit_code());
            }
        };

        println!("Exporting table {} from {}", config.table_id, config.server_address);
        println!();

        let summary = match coordinator.execute_export().await {
            Ok(s) => s,
            Err(e) => {
                log_error_with_context!(&e, "Export failed");
                eprintln!("Export failed: {e}");
                eprintln!(
                    "Progress is saved in {}; rerun with --resume to continue.",
                    config.status_path.display()
                );
                return Ok(e.exit_code());
            }
        };

        print_summary(&summary, &config);
        Ok(exit_code_for(&summary))
    }

    fn apply_overrides(&self, config: &mut DumpConfig) {
        if self.resume {
            tracing::info!("Enabling resume from CLI");
            config.resume = true;
        }

        if let Some(delay) = self.page_delay_ms {
            tracing::info!(page_delay_ms = delay, "Overriding page delay from CLI");
            config.page_delay_ms = delay;
        }
    }
}

fn print_summary(summary: &ExportSummary, config: &DumpConfig) {
    println!();
    println!("Export Summary:");
    println!("  Start page: {}", summary.start_page);
    println!("  Next page: {}", summary.next_page);
    println!("  Requests: {}", summary.pages_fetched);
    println!("  Pages stored: {}", summary.pages_stored);
    println!("  Records exported: {}", summary.records_exported);
    if let Some(total) = summary.dataset_total {
        println!("  Dataset total: {} ({})", total, config.output_path.display());
    }
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();

    if summary.interrupted {
        println!("Export interrupted gracefully. Progress saved.");
        println!("   Run with --resume to continue from page {}.", summary.next_page);
    } else if let Some(status) = summary.halted_on_status {
        println!("Export stopped: server returned HTTP {status}.");
    } else if summary.dry_run {
        println!("Dry run completed.");
    } else {
        println!("Export completed successfully!");
    }
}

/// Exit code for a run that returned a summary
fn exit_code_for(summary: &ExportSummary) -> i32 {
    if summary.interrupted {
        130
    } else if summary.halted_on_status.is_some() {
        4
    } else {
        0
    }
}
