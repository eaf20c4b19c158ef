//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the configuration file without contacting the server.

use crate::config::keys;
use crate::config::{load_raw_config, DumpConfig};
use crate::domain::DumpError;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug, Clone, Default)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        let raw = match load_raw_config(config_path) {
            Ok(raw) => {
                println!("Configuration file loaded successfully ({} keys)", raw.len());
                raw
            }
            Err(e) => {
                println!("Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(e.exit_code());
            }
        };

        let missing = missing_required(&raw);
        if !missing.is_empty() {
            println!("Missing required keys:");
            for key in &missing {
                println!("   - {key}");
            }
            println!();
            return Ok(2);
        }

        let unknown: Vec<&str> = raw.keys().filter(|key| !is_known_key(key)).collect();
        for key in &unknown {
            tracing::warn!(key = %key, "Unrecognised configuration key");
            println!("Warning: unrecognised key '{key}' is ignored");
        }

        match DumpConfig::from_raw(&raw) {
            Ok(config) => {
                println!("Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Server: {}", config.server_address);
                println!("  Rows URL: {}", config.rows_url());
                println!("  Table: {}", config.table_id);
                println!("  Starting page: {}", config.starting_page);
                println!("  Batch size: {}", config.page_size);
                println!("  Auth token: {}", config.auth_token.masked());
                println!("  Output file: {}", config.output_path.display());
                println!("  Status file: {}", config.status_path.display());
                println!("  Page delay: {}ms", config.page_delay_ms);
                match config.request_timeout_secs {
                    Some(secs) => println!("  Request timeout: {secs}s"),
                    None => println!("  Request timeout: none"),
                }
                println!("  Resume from status: {}", config.resume);
                println!("  HTTP error policy: {}", config.http_error_policy);
                println!();
                Ok(0)
            }
            Err(e) => {
                let e = DumpError::from(e);
                println!("Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(e.exit_code())
            }
        }
    }
}

fn missing_required(raw: &crate::config::RawConfig) -> Vec<&'static str> {
    keys::REQUIRED
        .iter()
        .copied()
        .filter(|key| raw.get(key).is_none())
        .collect()
}

fn is_known_key(key: &str) -> bool {
    keys::REQUIRED.contains(&key) || keys::OPTIONAL.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::parse_key_values;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_required_lists_absent_keys() {
        let raw = parse_key_values("server address = http://x\nbatch size = 5\n").unwrap();

        assert_eq!(
            missing_required(&raw),
            vec![keys::TABLE_NUMBER, keys::STARTING_PAGE, keys::AUTH_TOKEN]
        );
    }

    #[test]
    fn test_is_known_key() {
        assert!(is_known_key("auth token"));
        assert!(is_known_key("status file"));
        assert!(!is_known_key("bach size"));
    }

    #[tokio::test]
    async fn test_validate_reports_invalid_value() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "server address = ftp://baserow.example.com").unwrap();
        writeln!(file, "table number = 42").unwrap();
        writeln!(file, "starting page number = 1").unwrap();
        writeln!(file, "batch size = 100").unwrap();
        writeln!(file, "auth token = secret").unwrap();

        let code = ValidateArgs::default()
            .execute(&file.path().to_string_lossy())
            .await
            .unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_validate_accepts_complete_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "server address = https://baserow.example.com/").unwrap();
        writeln!(file, "table number = 42").unwrap();
        writeln!(file, "starting page number = 1").unwrap();
        writeln!(file, "batch size = 100").unwrap();
        writeln!(file, "auth token = secret").unwrap();

        let code = ValidateArgs::default()
            .execute(&file.path().to_string_lossy())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }
}
