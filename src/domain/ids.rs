//! Domain identifier types with validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Remote table identifier newtype wrapper
///
/// Baserow tables are addressed by number, but the identifier is only ever
/// spliced into a URL path, so it is kept as the string the operator wrote.
///
/// # Examples
///
/// ```
/// use baserow_dump::domain::ids::TableId;
/// use std::str::FromStr;
///
/// let table_id = TableId::from_str("617").unwrap();
/// assert_eq!(table_id.as_str(), "617");
/// assert!(TableId::from_str("6/17").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableId(String);

impl TableId {
    /// Creates a new TableId from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(TableId)` if the ID is a single non-empty path segment, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Table ID cannot be empty".to_string());
        }
        if id.contains('/') || id.chars().any(char::is_whitespace) {
            return Err(format!(
                "Table ID must be a single path segment without whitespace, got '{id}'"
            ));
        }
        Ok(Self(id))
    }

    /// Returns the table ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TableId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for TableId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
