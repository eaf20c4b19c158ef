//! Page source trait
//!
//! The driver only needs "give me page N of size M"; anything that can answer
//! that (the HTTP client, a scripted fake in tests) implements [`PageSource`].

use super::models::PageResponse;
use crate::domain::Result;
use async_trait::async_trait;

/// Source of paginated table rows
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch one page
    ///
    /// Implementations return every HTTP answer as a [`PageResponse`] and
    /// reserve errors for transport failures and undecodable bodies.
    ///
    /// # Arguments
    ///
    /// * `page` - 1-based page number
    /// * `size` - Rows per page
    async fn fetch_page(&self, page: u64, size: u64) -> Result<PageResponse>;

    /// Human-readable description of where pages come from
    fn describe(&self) -> String;
}
