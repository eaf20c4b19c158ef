//! Key names recognised in the configuration file

/// Base address of the server (required)
pub const SERVER_ADDRESS: &str = "server address";

/// Table identifier (required)
pub const TABLE_NUMBER: &str = "table number";

/// First page to request (required)
pub const STARTING_PAGE: &str = "starting page number";

/// Rows per page (required)
pub const BATCH_SIZE: &str = "batch size";

/// Database token (required)
pub const AUTH_TOKEN: &str = "auth token";

pub const OUTPUT_FILE: &str = "output file";
pub const STATUS_FILE: &str = "status file";
pub const PAGE_DELAY_MS: &str = "page delay ms";
pub const REQUEST_TIMEOUT_SECS: &str = "request timeout seconds";
pub const RESUME: &str = "resume from status";
pub const HTTP_ERROR_POLICY: &str = "http error policy";

/// Keys that must be present for an export to start
pub const REQUIRED: &[&str] = &[
    SERVER_ADDRESS,
    TABLE_NUMBER,
    STARTING_PAGE,
    BATCH_SIZE,
    AUTH_TOKEN,
];

/// Keys with a default value
pub const OPTIONAL: &[&str] = &[
    OUTPUT_FILE,
    STATUS_FILE,
    PAGE_DELAY_MS,
    REQUEST_TIMEOUT_SECS,
    RESUME,
    HTTP_ERROR_POLICY,
];
