//! Configuration schema types
//!
//! The loader produces untyped `key = value` pairs; this module turns them
//! into a [`DumpConfig`] with named, typed fields, validated once at startup.

use super::keys;
use super::loader::RawConfig;
use super::secret::AuthToken;
use crate::domain::errors::ConfigError;
use crate::domain::ids::TableId;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// What a non-2xx page response does to the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpErrorPolicy {
    /// Fail the run with the HTTP status
    #[default]
    Abort,
    /// Stop fetching as if the page were empty
    Halt,
    /// Forward the body to record extraction unchanged
    PassThrough,
}

impl FromStr for HttpErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "halt" => Ok(Self::Halt),
            "passthrough" | "pass-through" => Ok(Self::PassThrough),
            other => Err(format!(
                "unknown policy '{other}'. Must be one of: abort, halt, passthrough"
            )),
        }
    }
}

impl fmt::Display for HttpErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Abort => "abort",
            Self::Halt => "halt",
            Self::PassThrough => "passthrough",
        };
        f.write_str(name)
    }
}

/// Typed exporter configuration
#[derive(Debug, Clone)]
pub struct DumpConfig {
    /// Base address of the Baserow server, e.g. `https://api.baserow.io`
    pub server_address: String,

    /// Table whose rows are exported
    pub table_id: TableId,

    /// First page requested when not resuming
    pub starting_page: u64,

    /// Rows per page
    pub page_size: u64,

    /// Database token
    pub auth_token: AuthToken,

    /// JSON array file the records are accumulated into
    pub output_path: PathBuf,

    /// Plain-text file holding the next page to fetch
    pub status_path: PathBuf,

    /// Pause between consecutive page requests
    pub page_delay_ms: u64,

    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout_secs: Option<u64>,

    /// Start from the status file instead of `starting_page` when it exists
    pub resume: bool,

    /// Handling of non-2xx responses
    pub http_error_policy: HttpErrorPolicy,
}

impl DumpConfig {
    /// Builds and validates the typed configuration from raw settings
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] for an absent required key and
    /// [`ConfigError::InvalidValue`] for a value that does not parse.
    pub fn from_raw(raw: &RawConfig) -> Result<Self, ConfigError> {
        let server_address = parse_server_address(raw.require(keys::SERVER_ADDRESS)?)?;

        let table_id = TableId::new(raw.require(keys::TABLE_NUMBER)?)
            .map_err(|e| ConfigError::invalid(keys::TABLE_NUMBER, e))?;

        let starting_page = parse_positive(keys::STARTING_PAGE, raw.require(keys::STARTING_PAGE)?)?;
        let page_size = parse_positive(keys::BATCH_SIZE, raw.require(keys::BATCH_SIZE)?)?;

        let auth_token = AuthToken::new(raw.require(keys::AUTH_TOKEN)?);
        if auth_token.is_empty() {
            return Err(ConfigError::invalid(keys::AUTH_TOKEN, "token cannot be empty"));
        }

        let output_path = optional_path(raw, keys::OUTPUT_FILE, DEFAULT_OUTPUT_FILE)?;
        let status_path = optional_path(raw, keys::STATUS_FILE, DEFAULT_STATUS_FILE)?;
        if output_path == status_path {
            return Err(ConfigError::invalid(
                keys::STATUS_FILE,
                "must differ from the output file",
            ));
        }

        let page_delay_ms = match raw.get(keys::PAGE_DELAY_MS) {
            Some(value) => value
                .parse::<u64>()
                .map_err(|e| ConfigError::invalid(keys::PAGE_DELAY_MS, e.to_string()))?,
            None => 0,
        };

        let request_timeout_secs = raw
            .get(keys::REQUEST_TIMEOUT_SECS)
            .map(|value| parse_positive(keys::REQUEST_TIMEOUT_SECS, value))
            .transpose()?;

        let resume = match raw.get(keys::RESUME) {
            Some(value) => parse_bool(keys::RESUME, value)?,
            None => false,
        };

        let http_error_policy = match raw.get(keys::HTTP_ERROR_POLICY) {
            Some(value) => value
                .parse()
                .map_err(|e: String| ConfigError::invalid(keys::HTTP_ERROR_POLICY, e))?,
            None => HttpErrorPolicy::default(),
        };

        Ok(Self {
            server_address,
            table_id,
            starting_page,
            page_size,
            auth_token,
            output_path,
            status_path,
            page_delay_ms,
            request_timeout_secs,
            resume,
            http_error_policy,
        })
    }

    /// Endpoint listing the table's rows
    pub fn rows_url(&self) -> String {
        format!(
            "{}/api/database/rows/table/{}/",
            self.server_address.trim_end_matches('/'),
            self.table_id
        )
    }

    /// Delay between page requests
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    /// Request timeout, if configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Logging configuration
///
/// Console output is always on; the JSON file layer is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Enable the JSON file log
    pub local_enabled: bool,

    /// Directory for log files
    pub local_path: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: "logs".to_string(),
        }
    }
}

impl LoggingConfig {
    /// File logging into `dir`
    pub fn with_directory(dir: impl Into<String>) -> Self {
        Self {
            local_enabled: true,
            local_path: dir.into(),
        }
    }
}

/// Default dataset file name
pub const DEFAULT_OUTPUT_FILE: &str = "database_dump.json";

/// Default progress file name
pub const DEFAULT_STATUS_FILE: &str = "status.txt";

fn parse_server_address(value: &str) -> Result<String, ConfigError> {
    let url = url::Url::parse(value)
        .map_err(|e| ConfigError::invalid(keys::SERVER_ADDRESS, format!("{e}: '{value}'")))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::invalid(
            keys::SERVER_ADDRESS,
            format!("scheme must be http or https, got '{}'", url.scheme()),
        ));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::invalid(
            keys::SERVER_ADDRESS,
            "must not contain a query string or fragment",
        ));
    }
    Ok(value.to_string())
}

fn parse_positive(key: &str, value: &str) -> Result<u64, ConfigError> {
    match value.parse::<u64>() {
        Ok(0) => Err(ConfigError::invalid(key, "must be at least 1")),
        Ok(n) => Ok(n),
        Err(e) => Err(ConfigError::invalid(key, format!("{e}: '{value}'"))),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::invalid(
            key,
            format!("expected true or false, got '{value}'"),
        )),
    }
}

fn optional_path(raw: &RawConfig, key: &str, default: &str) -> Result<PathBuf, ConfigError> {
    match raw.get(key) {
        Some("") => Err(ConfigError::invalid(key, "path cannot be empty")),
        Some(value) => Ok(PathBuf::from(value)),
        None => Ok(PathBuf::from(default)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::parse_key_values;

    const MINIMAL: &str = "server address = http://localhost:8000
table number = 42
starting page number = 1
batch size = 100
auth token = abc";

    fn raw(contents: &str) -> RawConfig {
        parse_key_values(contents).unwrap()
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config = DumpConfig::from_raw(&raw(MINIMAL)).unwrap();

        assert_eq!(config.server_address, "http://localhost:8000");
        assert_eq!(config.table_id.as_str(), "42");
        assert_eq!(config.starting_page, 1);
        assert_eq!(config.page_size, 100);
        assert_eq!(config.auth_token.header_value(), "Token abc");
        assert_eq!(config.output_path, PathBuf::from("database_dump.json"));
        assert_eq!(config.status_path, PathBuf::from("status.txt"));
        assert_eq!(config.page_delay_ms, 0);
        assert!(config.request_timeout_secs.is_none());
        assert!(!config.resume);
        assert_eq!(config.http_error_policy, HttpErrorPolicy::Abort);
    }

    #[test]
    fn test_optional_keys() {
        let contents = format!(
            "{MINIMAL}
output file = out/rows.json
status file = out/next_page.txt
page delay ms = 250
request timeout seconds = 30
resume from status = true
http error policy = halt"
        );
        let config = DumpConfig::from_raw(&raw(&contents)).unwrap();

        assert_eq!(config.output_path, PathBuf::from("out/rows.json"));
        assert_eq!(config.status_path, PathBuf::from("out/next_page.txt"));
        assert_eq!(config.page_delay(), Duration::from_millis(250));
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
        assert!(config.resume);
        assert_eq!(config.http_error_policy, HttpErrorPolicy::Halt);
    }

    #[test]
    fn test_each_required_key_is_reported() {
        for key in [
            keys::SERVER_ADDRESS,
            keys::TABLE_NUMBER,
            keys::STARTING_PAGE,
            keys::BATCH_SIZE,
            keys::AUTH_TOKEN,
        ] {
            let contents: String = MINIMAL
                .lines()
                .filter(|line| !line.starts_with(key))
                .collect::<Vec<_>>()
                .join("\n");
            match DumpConfig::from_raw(&raw(&contents)) {
                Err(ConfigError::MissingKey(missing)) => assert_eq!(missing, key),
                other => panic!("Expected missing '{key}', got {other:?}"),
            }
        }
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let contents = MINIMAL.replace("batch size = 100", "batch size = 0");
        let err = DumpConfig::from_raw(&raw(&contents)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "batch size"));
    }

    #[test]
    fn test_rejects_non_numeric_page() {
        let contents = MINIMAL.replace("starting page number = 1", "starting page number = one");
        assert!(DumpConfig::from_raw(&raw(&contents)).is_err());
    }

    #[test]
    fn test_rejects_bad_server_address() {
        let contents = MINIMAL.replace("http://localhost:8000", "localhost:8000/api");
        assert!(DumpConfig::from_raw(&raw(&contents)).is_err());

        let contents = MINIMAL.replace("http://localhost:8000", "ftp://localhost");
        assert!(DumpConfig::from_raw(&raw(&contents)).is_err());
    }

    #[test]
    fn test_rejects_same_output_and_status_file() {
        let contents = format!("{MINIMAL}\noutput file = a.txt\nstatus file = a.txt");
        assert!(DumpConfig::from_raw(&raw(&contents)).is_err());
    }

    #[test]
    fn test_rows_url_strips_trailing_slash() {
        let contents = MINIMAL.replace("http://localhost:8000", "https://rows.example.com/");
        let config = DumpConfig::from_raw(&raw(&contents)).unwrap();
        assert_eq!(
            config.rows_url(),
            "https://rows.example.com/api/database/rows/table/42/"
        );
    }

    #[test]
    fn test_http_error_policy_parse() {
        assert_eq!("ABORT".parse::<HttpErrorPolicy>().unwrap(), HttpErrorPolicy::Abort);
        assert_eq!(
            "pass-through".parse::<HttpErrorPolicy>().unwrap(),
            HttpErrorPolicy::PassThrough
        );
        assert!("ignore".parse::<HttpErrorPolicy>().is_err());
        assert_eq!(HttpErrorPolicy::PassThrough.to_string(), "passthrough");
    }

    #[test]
    fn test_bool_parsing() {
        assert!(parse_bool("resume from status", "Yes").unwrap());
        assert!(!parse_bool("resume from status", "0").unwrap());
        assert!(parse_bool("resume from status", "maybe").is_err());
    }

    #[test]
    fn test_logging_config_file_layer_follows_directory() {
        let default = LoggingConfig::default();
        assert!(!default.local_enabled);

        let config = LoggingConfig::with_directory("var/log/dump");
        assert!(config.local_enabled);
        assert_eq!(config.local_path, "var/log/dump");
    }
}
