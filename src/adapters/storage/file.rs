//! File-backed stores
//!
//! The dataset is a pretty-printed JSON array (4-space indent) and the cursor
//! a bare decimal number. Both are written to a sibling `.tmp` file, synced,
//! and renamed over the target, so a reader sees either the old or the new
//! content and never a mix of both.

use super::traits::{CursorStore, DatasetStore};
use crate::core::state::cursor::PageCursor;
use crate::domain::{Dataset, DumpError, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Dataset stored as a JSON array file
#[derive(Debug, Clone)]
pub struct JsonFileDatasetStore {
    path: PathBuf,
}

impl JsonFileDatasetStore {
    /// Create a store for `path`; the file is created on first save
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetStore for JsonFileDatasetStore {
    async fn load(&self) -> Result<Option<Dataset>> {
        let Some(bytes) = read_if_exists(&self.path).await? else {
            return Ok(None);
        };

        let dataset = serde_json::from_slice::<Dataset>(&bytes).map_err(|e| {
            DumpError::Dataset(format!(
                "{} does not contain a JSON array of records: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(Some(dataset))
    }

    async fn save(&self, dataset: &Dataset) -> Result<()> {
        let bytes = to_pretty_json(dataset)?;
        write_atomically(&self.path, &bytes).await.map_err(|e| {
            DumpError::Dataset(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        tracing::debug!(
            path = %self.path.display(),
            records = dataset.len(),
            bytes = bytes.len(),
            "Dataset written"
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Cursor stored as a plain-text decimal page number
#[derive(Debug, Clone)]
pub struct TextFileCursorStore {
    path: PathBuf,
}

impl TextFileCursorStore {
    /// Create a store for `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CursorStore for TextFileCursorStore {
    async fn load(&self) -> Result<Option<PageCursor>> {
        let Some(bytes) = read_if_exists(&self.path).await? else {
            return Ok(None);
        };

        let text = String::from_utf8_lossy(&bytes);
        let cursor = text.trim().parse::<PageCursor>().map_err(|e| {
            DumpError::State(format!("{}: {}", self.path.display(), e))
        })?;

        Ok(Some(cursor))
    }

    async fn save(&self, cursor: &PageCursor) -> Result<()> {
        write_atomically(&self.path, cursor.to_string().as_bytes())
            .await
            .map_err(|e| {
                DumpError::State(format!("Failed to write {}: {}", self.path.display(), e))
            })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

async fn read_if_exists(path: &Path) -> Result<Option<Vec<u8>>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(DumpError::Io(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Write `bytes` to `path` through a temporary sibling file and a rename
async fn write_atomically(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    let result = write_and_rename(&tmp_path, path, bytes).await;
    if result.is_err() {
        // The target keeps its previous content; only the temporary file goes.
        let _ = tokio::fs::remove_file(&tmp_path).await;
    }
    result
}

async fn write_and_rename(tmp_path: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(tmp_path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;
    drop(file);

    tokio::fs::rename(tmp_path, path).await
}
