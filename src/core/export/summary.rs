//! Export summary and reporting

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Summary of an export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Page the run started from
    pub start_page: u64,

    /// Page a following run should start from
    pub next_page: u64,

    /// Requests issued, including the final empty page
    pub pages_fetched: u64,

    /// Pages whose records were stored
    pub pages_stored: u64,

    /// Records appended to the dataset in this run
    pub records_exported: usize,

    /// Dataset size after the run, when known
    pub dataset_total: Option<usize>,

    /// Non-2xx status that stopped the run under the halt policy
    pub halted_on_status: Option<u16>,

    /// Whether a shutdown signal stopped the run between pages
    pub interrupted: bool,

    /// Whether writes were skipped
    pub dry_run: bool,

    /// Wall-clock start
    pub started_at: DateTime<Utc>,

    /// Duration of the run
    pub duration: Duration,
}

impl ExportSummary {
    /// Create a summary for a run starting at `start_page`
    pub fn new(start_page: u64) -> Self {
        Self {
            start_page,
            next_page: start_page,
            pages_fetched: 0,
            pages_stored: 0,
            records_exported: 0,
            dataset_total: None,
            halted_on_status: None,
            interrupted: false,
            dry_run: false,
            started_at: Utc::now(),
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a stored page
    pub fn record_page(&mut self, page_number: u64, records: usize) {
        self.pages_stored += 1;
        self.records_exported += records;
        self.next_page = page_number.saturating_add(1);
    }

    /// Whether the run reached the end of the table
    pub fn is_complete(&self) -> bool {
        !self.interrupted && self.halted_on_status.is_none()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            start_page = self.start_page,
            next_page = self.next_page,
            pages_fetched = self.pages_fetched,
            pages_stored = self.pages_stored,
            records_exported = self.records_exported,
            dataset_total = ?self.dataset_total,
            interrupted = self.interrupted,
            dry_run = self.dry_run,
            duration_secs = self.duration.as_secs(),
            "Export finished"
        );

        if let Some(status) = self.halted_on_status {
            tracing::warn!(status, next_page = self.next_page, "Export halted on error status");
        }
    }
}
