//! Domain models and types.
//!
//! This module contains the core domain models, types, and error handling
//! shared by every other layer.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`TableId`])
//! - **Domain models** ([`Record`], [`Page`], [`Dataset`])
//! - **Error types** ([`DumpError`], [`ConfigError`], [`FetchError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, DumpError>`]:
//!
//! ```rust,no_run
//! use baserow_dump::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = baserow_dump::config::load_config("config.txt")?;
//!     println!("Exporting table {}", config.table_id);
//!     Ok(())
//! }
//! ```

pub mod dataset;
pub mod errors;
pub mod ids;
pub mod page;
pub mod result;

// Re-export commonly used types for convenience
pub use dataset::Dataset;
pub use errors::{ConfigError, DumpError, FetchError};
pub use ids::TableId;
pub use page::{Page, Record};
pub use result::Result;
