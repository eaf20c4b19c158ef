//! Export coordinator - the driver loop
//!
//! This module repeatedly fetches a page, appends its records to the dataset
//! and checkpoints the next page number, until the table runs out of rows.

use crate::adapters::baserow::{BaserowClient, PageSource};
use crate::config::{DumpConfig, HttpErrorPolicy};
use crate::core::export::pacing::{pacing_for, PacingStrategy};
use crate::core::export::pager::Pager;
use crate::core::export::summary::ExportSummary;
use crate::core::state::{PageCursor, StateManager};
use crate::domain::Result;
use crate::{log_export_start, log_page_stored};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// Settings the driver loop needs from the configuration
#[derive(Debug, Clone)]
pub struct ExportSettings {
    /// Page to start from when not resuming
    pub start_page: u64,

    /// Rows per page
    pub page_size: u64,

    /// Handling of non-2xx responses
    pub http_error_policy: HttpErrorPolicy,

    /// Prefer the saved cursor over `start_page`
    pub resume: bool,

    /// Fetch without writing
    pub dry_run: bool,
}

impl ExportSettings {
    /// Settings taken from the configuration, writes enabled
    pub fn from_config(config: &DumpConfig) -> Self {
        Self {
            start_page: config.starting_page,
            page_size: config.page_size,
            http_error_policy: config.http_error_policy,
            resume: config.resume,
            dry_run: false,
        }
    }
}

/// Export coordinator
pub struct ExportCoordinator {
    settings: ExportSettings,
    source: Arc<dyn PageSource>,
    state_manager: Arc<StateManager>,
    pacing: Arc<dyn PacingStrategy>,
    shutdown_signal: watch::Receiver<bool>,
}

impl ExportCoordinator {
    /// Create a coordinator wired to the Baserow client and file-backed stores
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &DumpConfig, shutdown_signal: watch::Receiver<bool>) -> Result<Self> {
        let source: Arc<dyn PageSource> = Arc::new(BaserowClient::new(config)?);
        let state_manager = Arc::new(StateManager::from_config(config));

        Ok(Self::with_components(
            ExportSettings::from_config(config),
            source,
            state_manager,
            pacing_for(config.page_delay()),
            shutdown_signal,
        ))
    }

    /// Create a coordinator from explicit parts
    pub fn with_components(
        settings: ExportSettings,
        source: Arc<dyn PageSource>,
        state_manager: Arc<StateManager>,
        pacing: Arc<dyn PacingStrategy>,
        shutdown_signal: watch::Receiver<bool>,
    ) -> Self {
        Self {
            settings,
            source,
            state_manager,
            pacing,
            shutdown_signal,
        }
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.settings.dry_run = dry_run;
        self
    }

    /// Execute the export
    ///
    /// This is the main entry point for the export process. It:
    /// 1. Picks the start page (configured, or the saved cursor when resuming)
    /// 2. Fetches pages in order until one comes back empty
    /// 3. Appends each page's records to the dataset
    /// 4. Checkpoints the following page number
    /// 5. Returns a summary
    ///
    /// A shutdown signal is honoured between pages, never mid-page.
    ///
    /// # Errors
    ///
    /// Any fetch or storage failure aborts the run. The cursor is only ever
    /// advanced past pages whose records were stored.
    pub async fn execute_export(&self) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let start_page = self.resolve_start_page().await?;

        let mut summary = ExportSummary::new(start_page);
        summary.dry_run = self.settings.dry_run;

        log_export_start!(self.source.describe(), start_page, self.settings.page_size);

        let mut pager = Pager::new(
            self.source.clone(),
            self.pacing.clone(),
            self.settings.http_error_policy,
            start_page,
            self.settings.page_size,
        );

        loop {
            if *self.shutdown_signal.borrow() {
                tracing::info!(
                    next_page = summary.next_page,
                    "Shutdown requested, stopping before next page"
                );
                summary.interrupted = true;
                break;
            }

            let page = match pager.next_batch().await {
                Ok(Some(page)) => page,
                Ok(None) => break,
                Err(e) => {
                    tracing::error!(
                        page = pager.next_page(),
                        pages_stored = summary.pages_stored,
                        error = %e,
                        "Export aborted"
                    );
                    return Err(e);
                }
            };

            let page_number = page.number;
            let record_count = page.len();

            if self.settings.dry_run {
                tracing::info!(
                    page = page_number,
                    records = record_count,
                    "Dry run, skipping write"
                );
                summary.record_page(page_number, record_count);
                continue;
            }

            let total = self.state_manager.append_records(page.records).await?;
            self.state_manager
                .checkpoint(&PageCursor::after(page_number)?)
                .await?;

            summary.record_page(page_number, record_count);
            summary.dataset_total = Some(total);
            log_page_stored!(page_number, record_count, total);
        }

        summary.pages_fetched = pager.requests_made();
        summary.halted_on_status = pager.halted_on_status();

        let mut summary = summary.with_duration(start_time.elapsed());
        if summary.dataset_total.is_none() && !summary.dry_run {
            summary.dataset_total = Some(self.state_manager.load_dataset().await?.len());
        }
        summary.log_summary();

        Ok(summary)
    }

    async fn resolve_start_page(&self) -> Result<u64> {
        if !self.settings.resume {
            return Ok(self.settings.start_page);
        }

        match self.state_manager.load_cursor().await? {
            Some(cursor) => {
                tracing::info!(
                    location = %self.state_manager.cursor_location(),
                    next_page = cursor.next_page(),
                    "Resuming from saved cursor"
                );
                Ok(cursor.next_page())
            }
            None => {
                tracing::info!(
                    start_page = self.settings.start_page,
                    "No saved cursor, starting from configured page"
                );
                Ok(self.settings.start_page)
            }
        }
    }
}
