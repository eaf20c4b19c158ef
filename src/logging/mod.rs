//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output on stderr
//! - Configurable log levels
//! - JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use baserow_dump::logging::init_logging;
//! use baserow_dump::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export run
///
/// # Example
///
/// ```no_run
/// use baserow_dump::log_export_start;
///
/// log_export_start!("https://baserow.example.com/api/database/rows/table/42/", 1, 100);
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($source:expr, $start_page:expr, $page_size:expr) => {
        tracing::info!(
            source = %$source,
            start_page = $start_page,
            page_size = $page_size,
            "Starting export"
        );
    };
}

/// Log a page whose records were stored and checkpointed
///
/// # Example
///
/// ```no_run
/// use baserow_dump::log_page_stored;
///
/// log_page_stored!(3, 100, 300);
/// ```
#[macro_export]
macro_rules! log_page_stored {
    ($page:expr, $records:expr, $total:expr) => {
        tracing::info!(
            page = $page,
            records = $records,
            dataset_total = $total,
            "Page stored"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use baserow_dump::log_error_with_context;
/// use baserow_dump::domain::DumpError;
///
/// let error = DumpError::Other("boom".to_string());
/// log_error_with_context!(&error, "Export failed");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
