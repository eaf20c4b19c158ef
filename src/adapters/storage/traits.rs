//! Storage abstraction traits
//!
//! The dataset and the progress cursor live in two separate stores so the
//! driver can be handed file-backed stores in production and in-memory ones
//! in tests.

use crate::core::state::cursor::PageCursor;
use crate::domain::{Dataset, Result};
use async_trait::async_trait;

/// Persistence for the accumulated dataset
#[async_trait]
pub trait DatasetStore: Send + Sync {
    /// Load the dataset
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if stored content exists but is not a JSON array.
    async fn load(&self) -> Result<Option<Dataset>>;

    /// Replace the stored dataset with `dataset`
    ///
    /// Implementations must never leave a partially written dataset behind.
    async fn save(&self, dataset: &Dataset) -> Result<()>;

    /// Where the dataset lives, for logs and status output
    fn location(&self) -> String;
}

/// Persistence for the next page to fetch
#[async_trait]
pub trait CursorStore: Send + Sync {
    /// Load the cursor, `Ok(None)` if none has been saved
    async fn load(&self) -> Result<Option<PageCursor>>;

    /// Overwrite the stored cursor
    async fn save(&self, cursor: &PageCursor) -> Result<()>;

    /// Where the cursor lives, for logs and status output
    fn location(&self) -> String;
}
