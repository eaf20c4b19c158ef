//! Result type alias
//!
//! This module provides a convenient Result type alias that uses DumpError
//! as the error type.

use super::errors::DumpError;

/// Result type alias for exporter operations
///
/// # Examples
///
/// ```
/// use baserow_dump::domain::result::Result;
/// use baserow_dump::domain::errors::DumpError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(DumpError::State("cursor file is empty".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, DumpError>;
