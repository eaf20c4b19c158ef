//! Records and pages of the remote table

/// One row of the remote table
///
/// Rows are requested with human-readable field names, so each record is a
/// JSON object keyed by field name. No schema is imposed on it.
pub type Record = serde_json::Value;

/// A non-empty batch of records fetched for one page number
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Page number the records were fetched from
    pub number: u64,

    /// Records in the order the server returned them
    pub records: Vec<Record>,
}

impl Page {
    /// Create a page
    pub fn new(number: u64, records: Vec<Record>) -> Self {
        Self { number, records }
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the page carries no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
