//! State manager for the dataset and the progress cursor
//!
//! This module provides the StateManager that accumulates fetched records
//! into the dataset store and checkpoints the next page to the cursor store.

use crate::adapters::storage::{
    CursorStore, DatasetStore, JsonFileDatasetStore, TextFileCursorStore,
};
use crate::config::DumpConfig;
use crate::core::state::cursor::PageCursor;
use crate::domain::{Dataset, Record, Result};
use std::sync::Arc;

/// State manager over a dataset store and a cursor store
///
/// The two stores are injected so tests can swap in in-memory fakes.
pub struct StateManager {
    /// Accumulated dataset backend
    dataset: Arc<dyn DatasetStore>,

    /// Progress cursor backend
    cursor: Arc<dyn CursorStore>,
}

impl StateManager {
    /// Create a StateManager with explicit stores
    pub fn new_with_stores(dataset: Arc<dyn DatasetStore>, cursor: Arc<dyn CursorStore>) -> Self {
        Self { dataset, cursor }
    }

    /// File-backed stores at the configured output and status paths
    pub fn from_config(config: &DumpConfig) -> Self {
        Self::new_with_stores(
            Arc::new(JsonFileDatasetStore::new(&config.output_path)),
            Arc::new(TextFileCursorStore::new(&config.status_path)),
        )
    }

    /// Append records to the stored dataset
    ///
    /// Loads the current dataset (or starts an empty one if nothing is stored),
    /// extends it and saves it back.
    ///
    /// # Returns
    ///
    /// The number of records in the dataset after the append.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored dataset cannot be read or written.
    pub async fn append_records(&self, records: Vec<Record>) -> Result<usize> {
        let appended = records.len();
        let mut dataset = self.dataset.load().await?.unwrap_or_default();
        dataset.extend(records);
        self.dataset.save(&dataset).await?;

        tracing::info!(
            location = %self.dataset.location(),
            appended,
            total = dataset.len(),
            "Records appended"
        );

        Ok(dataset.len())
    }

    /// Load the stored dataset, empty if nothing is stored
    pub async fn load_dataset(&self) -> Result<Dataset> {
        Ok(self.dataset.load().await?.unwrap_or_default())
    }

    /// Load the saved cursor
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(PageCursor))` if found, `Ok(None)` if not found, or an error.
    pub async fn load_cursor(&self) -> Result<Option<PageCursor>> {
        self.cursor.load().await
    }

    /// Checkpoint progress by saving the cursor
    ///
    /// Called after each page's records have been stored.
    pub async fn checkpoint(&self, cursor: &PageCursor) -> Result<()> {
        tracing::info!(
            location = %self.cursor.location(),
            next_page = cursor.next_page(),
            "Checkpointing progress"
        );

        self.cursor.save(cursor).await
    }

    /// Location of the dataset store
    pub fn dataset_location(&self) -> String {
        self.dataset.location()
    }

    /// Location of the cursor store
    pub fn cursor_location(&self) -> String {
        self.cursor.location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemoryCursorStore, InMemoryDatasetStore};
    use serde_json::json;
    use tempfile::TempDir;

    fn in_memory() -> (StateManager, Arc<InMemoryDatasetStore>, Arc<InMemoryCursorStore>) {
        let dataset = Arc::new(InMemoryDatasetStore::new());
        let cursor = Arc::new(InMemoryCursorStore::new());
        let manager = StateManager::new_with_stores(dataset.clone(), cursor.clone());
        (manager, dataset, cursor)
    }

    #[tokio::test]
    async fn test_append_creates_dataset() {
        let (manager, dataset, _) = in_memory();

        let total = manager
            .append_records(vec![json!({"id": 1}), json!({"id": 2})])
            .await
            .unwrap();

        assert_eq!(total, 2);
        assert_eq!(
            dataset.snapshot().unwrap().into_records(),
            vec![json!({"id": 1}), json!({"id": 2})]
        );
    }

    #[tokio::test]
    async fn test_append_concatenates_in_order() {
        let (manager, dataset, _) = in_memory();

        manager.append_records(vec![json!({"id": 1})]).await.unwrap();
        let total = manager
            .append_records(vec![json!({"id": 2}), json!({"id": 3})])
            .await
            .unwrap();

        assert_eq!(total, 3);
        assert_eq!(dataset.save_count(), 2);
        assert_eq!(
            manager.load_dataset().await.unwrap().into_records(),
            vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})]
        );
    }

    #[tokio::test]
    async fn test_checkpoint_and_load_cursor() {
        let (manager, _, cursor) = in_memory();
        assert!(manager.load_cursor().await.unwrap().is_none());

        manager.checkpoint(&PageCursor::after(5).unwrap()).await.unwrap();

        assert_eq!(cursor.current(), Some(PageCursor::new(6)));
        assert_eq!(
            manager.load_cursor().await.unwrap(),
            Some(PageCursor::new(6))
        );
    }

    #[tokio::test]
    async fn test_file_backed_append_round_trip() {
        let dir = TempDir::new().unwrap();
        let manager = StateManager::new_with_stores(
            Arc::new(JsonFileDatasetStore::new(dir.path().join("dump.json"))),
            Arc::new(TextFileCursorStore::new(dir.path().join("status.txt"))),
        );

        let a = vec![json!({"id": 1, "Name": "first"})];
        let b = vec![json!({"id": 2, "Name": "second"}), json!({"id": 3})];
        manager.append_records(a.clone()).await.unwrap();
        manager.append_records(b.clone()).await.unwrap();

        let text = std::fs::read_to_string(dir.path().join("dump.json")).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, [a, b].concat());
    }
}
