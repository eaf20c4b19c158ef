//! In-memory stores
//!
//! Used in tests and when embedding the exporter with a caller-owned sink.
//! Each store counts its saves so tests can assert how often the driver
//! wrote.

use super::traits::{CursorStore, DatasetStore};
use crate::core::state::cursor::PageCursor;
use crate::domain::{Dataset, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Dataset kept in memory
#[derive(Debug, Default)]
pub struct InMemoryDatasetStore {
    dataset: Mutex<Option<Dataset>>,
    saves: AtomicUsize,
}

impl InMemoryDatasetStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `dataset`
    pub fn with_dataset(dataset: Dataset) -> Self {
        Self {
            dataset: Mutex::new(Some(dataset)),
            saves: AtomicUsize::new(0),
        }
    }

    /// Current content
    pub fn snapshot(&self) -> Option<Dataset> {
        self.dataset
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of completed saves
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatasetStore for InMemoryDatasetStore {
    async fn load(&self) -> Result<Option<Dataset>> {
        Ok(self.snapshot())
    }

    async fn save(&self, dataset: &Dataset) -> Result<()> {
        *self
            .dataset
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(dataset.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

/// Cursor kept in memory
#[derive(Debug, Default)]
pub struct InMemoryCursorStore {
    cursor: Mutex<Option<PageCursor>>,
    history: Mutex<Vec<PageCursor>>,
}

impl InMemoryCursorStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `cursor`
    pub fn with_cursor(cursor: PageCursor) -> Self {
        Self {
            cursor: Mutex::new(Some(cursor)),
            history: Mutex::new(Vec::new()),
        }
    }

    /// Current cursor
    pub fn current(&self) -> Option<PageCursor> {
        *self
            .cursor
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Every cursor saved, oldest first
    pub fn history(&self) -> Vec<PageCursor> {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl CursorStore for InMemoryCursorStore {
    async fn load(&self) -> Result<Option<PageCursor>> {
        Ok(self.current())
    }

    async fn save(&self, cursor: &PageCursor) -> Result<()> {
        *self
            .cursor
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(*cursor);
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(*cursor);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
