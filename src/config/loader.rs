//! Configuration loader for the flat `key = value` file format
//!
//! The file holds one assignment per line:
//!
//! ```text
//! server address = https://baserow.example.com
//! table number = 617
//! starting page number = 1
//! batch size = 200
//! auth token = ${BASEROW_TOKEN}
//! ```

use super::schema::DumpConfig;
use crate::domain::errors::ConfigError;
use crate::domain::result::Result;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Environment variables that override individual keys after parsing
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("BASEROW_DUMP_SERVER_ADDRESS", super::keys::SERVER_ADDRESS),
    ("BASEROW_DUMP_TABLE_NUMBER", super::keys::TABLE_NUMBER),
    ("BASEROW_DUMP_STARTING_PAGE_NUMBER", super::keys::STARTING_PAGE),
    ("BASEROW_DUMP_BATCH_SIZE", super::keys::BATCH_SIZE),
    ("BASEROW_DUMP_AUTH_TOKEN", super::keys::AUTH_TOKEN),
];

/// Untyped settings exactly as they appear in the file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    entries: BTreeMap<String, String>,
}

impl RawConfig {
    /// Value for `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value for `key`, failing with [`ConfigError::MissingKey`] when absent
    pub fn require(&self, key: &str) -> std::result::Result<&str, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
    }

    /// Set or replace a value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Keys present, in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key is present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses `key = value` lines into a [`RawConfig`]
///
/// Lines are trimmed and blank lines are skipped. Every other line, including
/// one starting with `#`, must contain exactly one `=`. Keys and values are
/// trimmed, and a repeated key keeps its last value.
///
/// # Errors
///
/// Returns [`ConfigError::Format`] for the first line without exactly one `=`.
///
/// # Examples
///
/// ```
/// use baserow_dump::config::loader::parse_key_values;
///
/// let raw = parse_key_values("  batch size =  200 \n\n table number=7").unwrap();
/// assert_eq!(raw.get("batch size"), Some("200"));
/// assert_eq!(raw.get("table number"), Some("7"));
/// assert!(parse_key_values("a = b = c").is_err());
/// ```
pub fn parse_key_values(contents: &str) -> std::result::Result<RawConfig, ConfigError> {
    let mut raw = RawConfig::default();

    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => raw.insert(key.trim(), value.trim()),
            _ => {
                return Err(ConfigError::Format {
                    line: index + 1,
                    content: line.to_string(),
                })
            }
        }
    }

    Ok(raw)
}

/// Reads and parses a configuration file without typing it
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, a `${VAR}`
/// placeholder is unset, or a line is malformed.
pub fn load_raw_config(path: impl AsRef<Path>) -> Result<RawConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()).into());
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;

    let contents = substitute_env_vars(&contents)?;
    let mut raw = parse_key_values(&contents)?;
    apply_env_overrides(&mut raw);

    tracing::debug!(
        path = %path.display(),
        keys = raw.len(),
        "Configuration file parsed"
    );

    Ok(raw)
}

/// Loads and validates the configuration file
///
/// This function:
/// 1. Reads the file
/// 2. Substitutes `${VAR}` placeholders from the environment
/// 3. Parses the `key = value` lines
/// 4. Applies `BASEROW_DUMP_*` environment overrides
/// 5. Converts the result into a typed [`DumpConfig`]
///
/// # Examples
///
/// ```no_run
/// use baserow_dump::config::load_config;
///
/// let config = load_config("config.txt").expect("Failed to load config");
/// println!("Exporting table {}", config.table_id);
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<DumpConfig> {
    let raw = load_raw_config(path)?;
    Ok(DumpConfig::from_raw(&raw)?)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> std::result::Result<String, ConfigError> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is valid");
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ConfigError::MissingEnvVars(missing_vars.join(", ")));
    }

    Ok(result)
}

/// Applies `BASEROW_DUMP_*` environment overrides on top of the file values
fn apply_env_overrides(raw: &mut RawConfig) {
    for (var, key) in ENV_OVERRIDES {
        if let Ok(value) = std::env::var(var) {
            tracing::debug!(key = %key, env = %var, "Overriding configuration key from environment");
            raw.insert(*key, value.trim());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use test_case::test_case;

    #[test]
    fn test_parse_trims_keys_and_values() {
        let raw = parse_key_values("   server address   =   http://localhost:8000   ").unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw.get("server address"), Some("http://localhost:8000"));
    }

    #[test]
    fn test_parse_keeps_exactly_the_keys_present() {
        let raw = parse_key_values("a=1\nb = 2\n\n# c = 3\n").unwrap();
        assert_eq!(raw.keys().collect::<Vec<_>>(), vec!["# c", "a", "b"]);
        assert_eq!(raw.get("# c"), Some("3"));
    }

    #[test]
    fn test_parse_last_duplicate_wins() {
        let raw = parse_key_values("batch size = 10\nbatch size = 20").unwrap();
        assert_eq!(raw.get("batch size"), Some("20"));
    }

    #[test]
    fn test_parse_allows_empty_value() {
        let raw = parse_key_values("output file =").unwrap();
        assert_eq!(raw.get("output file"), Some(""));
    }

    #[test_case("no separator here", 1 ; "missing separator")]
    #[test_case("token = abc==", 1 ; "padded token")]
    #[test_case("a = 1\nx = y = z", 2 ; "second line with two separators")]
    #[test_case("a = 1\n\n  just words  ", 3 ; "line number counts blank lines")]
    #[test_case("# just a note", 1 ; "hash line without separator")]
    #[test_case("a = 1\n# x = y = z", 2 ; "hash line with two separators")]
    fn test_parse_rejects_lines_without_single_separator(input: &str, expected_line: usize) {
        match parse_key_values(input) {
            Err(ConfigError::Format { line, .. }) => assert_eq!(line, expected_line),
            other => panic!("Expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_require_missing_key() {
        let raw = parse_key_values("a = 1").unwrap();
        assert!(matches!(
            raw.require("auth token"),
            Err(ConfigError::MissingKey(key)) if key == "auth token"
        ));
    }

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("BASEROW_DUMP_LOADER_TEST_TOKEN", "tok-123");
        let result = substitute_env_vars("auth token = ${BASEROW_DUMP_LOADER_TEST_TOKEN}").unwrap();
        assert_eq!(result, "auth token = tok-123\n");
        std::env::remove_var("BASEROW_DUMP_LOADER_TEST_TOKEN");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("BASEROW_DUMP_LOADER_MISSING");
        let result = substitute_env_vars("auth token = ${BASEROW_DUMP_LOADER_MISSING}");
        assert!(matches!(result, Err(ConfigError::MissingEnvVars(_))));
    }

    #[test]
    fn test_substitute_applies_to_hash_lines() {
        std::env::remove_var("BASEROW_DUMP_NEVER_SET");
        let result = substitute_env_vars("# auth token = ${BASEROW_DUMP_NEVER_SET}");
        assert!(matches!(result, Err(ConfigError::MissingEnvVars(vars)) if vars == "BASEROW_DUMP_NEVER_SET"));
    }

    #[test]
    fn test_load_raw_config_missing_file() {
        let result = load_raw_config("nonexistent-config.txt");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_raw_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"server address = http://localhost\ntable number = 5\n")
            .unwrap();
        temp_file.flush().unwrap();

        let raw = load_raw_config(temp_file.path()).unwrap();
        assert_eq!(raw.get("server address"), Some("http://localhost"));
        assert_eq!(raw.get("table number"), Some("5"));
    }
}
