//! Domain error types
//!
//! This module defines the error hierarchy for the exporter. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum DumpError {
    /// Configuration file and value errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors raised while fetching a page from the remote table
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Accumulated dataset file errors
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Progress cursor errors
    #[error("State management error: {0}")]
    State(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl DumpError {
    /// Process exit code the CLI reports for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DumpError::Config(_) => 2,
            DumpError::Fetch(
                FetchError::ConnectionFailed(_)
                | FetchError::Timeout(_)
                | FetchError::HttpStatus { .. },
            ) => 4,
            _ => 5,
        }
    }
}

/// Configuration errors
///
/// Raised while reading the key=value file or converting it into typed settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    /// Configuration file could not be read
    #[error("Failed to read configuration file: {0}")]
    Read(String),

    /// A non-empty line without exactly one `=`
    #[error("Line {line} is not a single key=value assignment: {content:?}")]
    Format { line: usize, content: String },

    /// A required key is absent
    #[error("Missing required key '{0}'")]
    MissingKey(String),

    /// A key is present but its value cannot be used
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// `${VAR}` placeholders referencing unset variables
    #[error("Missing required environment variables: {0}")]
    MissingEnvVars(String),
}

impl ConfigError {
    /// Shorthand for [`ConfigError::InvalidValue`]
    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Page fetch errors
///
/// Errors that occur when talking to the remote table API.
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, refused connection, TLS or other transport failure
    #[error("Failed to connect to server: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Server answered with a non-2xx status
    #[error("Server returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Body could not be decoded
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// Decoded body has no `results` field
    #[error("Response for page {page} (HTTP {status}) has no 'results' field: {body}")]
    MissingResults { page: u64, status: u16, body: String },
}

impl From<std::io::Error> for DumpError {
    fn from(err: std::io::Error) -> Self {
        DumpError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DumpError {
    fn from(err: serde_json::Error) -> Self {
        DumpError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = DumpError::from(ConfigError::MissingKey("auth token".to_string()));
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required key 'auth token'"
        );
    }

    #[test]
    fn test_format_error_display() {
        let err = ConfigError::Format {
            line: 3,
            content: "a=b=c".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Line 3 is not a single key=value assignment: \"a=b=c\""
        );
    }

    #[test]
    fn test_fetch_error_conversion() {
        let err: DumpError = FetchError::ConnectionFailed("refused".to_string()).into();
        assert!(matches!(err, DumpError::Fetch(_)));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(DumpError::from(ConfigError::MissingKey("x".into())).exit_code(), 2);
        assert_eq!(
            DumpError::from(FetchError::HttpStatus {
                status: 500,
                body: "{}".into()
            })
            .exit_code(),
            4
        );
        assert_eq!(
            DumpError::from(FetchError::MissingResults {
                page: 1,
                status: 500,
                body: "{}".into()
            })
            .exit_code(),
            5
        );
        assert_eq!(DumpError::Dataset("bad".into()).exit_code(), 5);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: DumpError = io_err.into();
        assert!(matches!(err, DumpError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: DumpError = json_err.into();
        assert!(matches!(err, DumpError::Serialization(_)));
    }

    #[test]
    fn test_dump_error_implements_std_error() {
        let err = DumpError::State("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
