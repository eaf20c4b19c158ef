//! Configuration management.
//!
//! The exporter reads a flat text file of `key = value` assignments, one per
//! line, and validates it once into a typed [`DumpConfig`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use baserow_dump::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("config.txt")?;
//!
//! println!("Server: {}", config.server_address);
//! println!("Table: {}", config.table_id);
//! println!("Page size: {}", config.page_size);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```text
//! server address = https://api.baserow.io
//! table number = 617
//! starting page number = 1
//! batch size = 200
//! auth token = ${BASEROW_TOKEN}
//! output file = database_dump.json
//! status file = status.txt
//! page delay ms = 0
//! resume from status = false
//! http error policy = abort
//! ```
//!
//! # Environment Variables
//!
//! `${VAR_NAME}` placeholders are substituted before parsing, and the
//! `BASEROW_DUMP_*` variables override individual keys:
//!
//! ```bash
//! export BASEROW_DUMP_AUTH_TOKEN="secret-token"
//! export BASEROW_DUMP_TABLE_NUMBER="617"
//! ```

pub mod keys;
pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_raw_config, RawConfig};
pub use schema::{DumpConfig, HttpErrorPolicy, LoggingConfig};
pub use secret::AuthToken;
