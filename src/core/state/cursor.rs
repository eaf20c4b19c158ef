//! Progress cursor
//!
//! The cursor is the page number the next run should start from. It is
//! advanced only after a page's records have been stored.

use crate::domain::{DumpError, Result};
use std::fmt;
use std::str::FromStr;

/// Next page to fetch
///
/// # Examples
///
/// ```
/// use baserow_dump::core::state::cursor::PageCursor;
///
/// let cursor: PageCursor = "3".parse().unwrap();
/// assert_eq!(cursor.next_page(), 3);
/// assert_eq!(cursor.to_string(), "3");
/// assert!("0".parse::<PageCursor>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageCursor {
    next_page: u64,
}

impl PageCursor {
    /// Cursor pointing at `next_page`
    pub fn new(next_page: u64) -> Self {
        Self { next_page }
    }

    /// Cursor following a stored page
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::State`] when `page` is the largest page number.
    pub fn after(page: u64) -> Result<Self> {
        page.checked_add(1)
            .map(Self::new)
            .ok_or_else(|| DumpError::State(format!("no page follows page {page}")))
    }

    /// Page number to fetch next
    pub fn next_page(&self) -> u64 {
        self.next_page
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.next_page)
    }
}

impl FromStr for PageCursor {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().parse::<u64>() {
            Ok(0) => Err("page cursor must be at least 1".to_string()),
            Ok(page) => Ok(Self::new(page)),
            Err(e) => Err(format!("invalid page cursor '{s}': {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after() {
        assert_eq!(PageCursor::after(4).unwrap(), PageCursor::new(5));
    }

    #[test]
    fn test_after_last_page_number() {
        assert!(matches!(
            PageCursor::after(u64::MAX),
            Err(DumpError::State(_))
        ));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<PageCursor>().is_err());
        assert!("-1".parse::<PageCursor>().is_err());
        assert!("two".parse::<PageCursor>().is_err());
        assert_eq!(" 9 ".parse::<PageCursor>().unwrap(), PageCursor::new(9));
    }
}
