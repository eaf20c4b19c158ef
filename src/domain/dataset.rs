//! Accumulated dataset model
//!
//! The dataset is the ordered list of every record exported so far. It is
//! persisted as a single JSON array and only ever grows.

use super::page::Record;
use serde::{Deserialize, Serialize};

/// All records accumulated across runs, in fetch order
///
/// # Examples
///
/// ```
/// use baserow_dump::domain::Dataset;
/// use serde_json::json;
///
/// let mut dataset = Dataset::default();
/// dataset.extend(vec![json!({"id": 1}), json!({"id": 2})]);
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(serde_json::to_string(&dataset).unwrap(), r#"[{"id":1},{"id":2}]"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Create a dataset holding exactly `records`
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Append records, keeping their order. No deduplication is done.
    pub fn extend(&mut self, records: impl IntoIterator<Item = Record>) {
        self.records.extend(records);
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the dataset and return its records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}
