//! Lazy page sequence
//!
//! The [`Pager`] walks the remote table one page at a time. Each call to
//! [`Pager::next_batch`] issues at most one request, and the sequence ends at
//! the first page without records. Once finished it stays finished.

use crate::adapters::baserow::{models::body_preview, PageSource};
use crate::config::HttpErrorPolicy;
use crate::core::export::pacing::PacingStrategy;
use crate::domain::{DumpError, FetchError, Page, Result};
use std::sync::Arc;

/// Pull-based iterator over non-empty pages
pub struct Pager {
    source: Arc<dyn PageSource>,
    pacing: Arc<dyn PacingStrategy>,
    policy: HttpErrorPolicy,
    next_page: u64,
    page_size: u64,
    requests_made: u64,
    finished: bool,
    halted_on_status: Option<u16>,
}

impl Pager {
    /// Start paging at `start_page`
    pub fn new(
        source: Arc<dyn PageSource>,
        pacing: Arc<dyn PacingStrategy>,
        policy: HttpErrorPolicy,
        start_page: u64,
        page_size: u64,
    ) -> Self {
        Self {
            source,
            pacing,
            policy,
            next_page: start_page,
            page_size,
            requests_made: 0,
            finished: false,
            halted_on_status: None,
        }
    }

    /// Fetch the next non-empty page
    ///
    /// # Returns
    ///
    /// `Ok(None)` once a page comes back empty, or when a non-2xx status is
    /// met under [`HttpErrorPolicy::Halt`].
    ///
    /// # Errors
    ///
    /// Transport failures, a non-2xx status under [`HttpErrorPolicy::Abort`],
    /// and bodies without a usable `results` field. The pager is finished
    /// after any error.
    pub async fn next_batch(&mut self) -> Result<Option<Page>> {
        if self.finished {
            return Ok(None);
        }

        let delay = self.pacing.delay_before(self.requests_made);
        if !delay.is_zero() {
            tracing::debug!(delay_ms = delay.as_millis() as u64, "Pacing before next request");
            tokio::time::sleep(delay).await;
        }

        let page_number = self.next_page;
        self.requests_made += 1;
        // Cleared again below only when a page is yielded.
        self.finished = true;

        let response = self.source.fetch_page(page_number, self.page_size).await?;

        if !response.is_success() {
            match self.policy {
                HttpErrorPolicy::Abort => {
                    return Err(FetchError::HttpStatus {
                        status: response.status,
                        body: body_preview(&response.body),
                    }
                    .into());
                }
                HttpErrorPolicy::Halt => {
                    tracing::warn!(
                        page = page_number,
                        status = response.status,
                        "Stopping at error status"
                    );
                    self.halted_on_status = Some(response.status);
                    return Ok(None);
                }
                HttpErrorPolicy::PassThrough => {
                    tracing::warn!(
                        page = page_number,
                        status = response.status,
                        "Forwarding error body to record extraction"
                    );
                }
            }
        }

        if let Some(count) = response.total_count() {
            tracing::debug!(page = page_number, total_rows = count, "Server row count");
        }

        let records = response.into_records()?;
        if records.is_empty() {
            tracing::info!(page = page_number, "Empty page, no more rows");
            return Ok(None);
        }

        // The checkpoint after this page needs a representable page number.
        self.next_page = page_number.checked_add(1).ok_or_else(|| {
            DumpError::State(format!("page {page_number} has records but no page can follow it"))
        })?;
        self.finished = false;
        Ok(Some(Page::new(page_number, records)))
    }

    /// Page number the next request would use
    pub fn next_page(&self) -> u64 {
        self.next_page
    }

    /// Number of requests issued so far
    pub fn requests_made(&self) -> u64 {
        self.requests_made
    }

    /// Status that ended the sequence under [`HttpErrorPolicy::Halt`]
    pub fn halted_on_status(&self) -> Option<u16> {
        self.halted_on_status
    }

    /// Whether the sequence has ended
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
