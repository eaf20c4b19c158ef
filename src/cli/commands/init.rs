//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "config.txt")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your server, table and token", self.output);
                println!("     (or set BASEROW_DUMP_AUTH_TOKEN in the environment or .env)");
                println!("  2. Validate configuration: baserow-dump validate-config");
                println!("  3. Run export: baserow-dump export");
                println!();
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, output = %self.output, "Failed to write configuration file");
                println!("Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Generate the configuration template
    ///
    /// Every line is an assignment; the loader has no comment syntax.
    fn generate_config() -> String {
        r#"server address = https://api.baserow.io
table number = 1
starting page number = 1
batch size = 100
auth token = replace-with-your-database-token
output file = database_dump.json
status file = status.txt
page delay ms = 0
resume from status = false
http error policy = abort
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::parse_key_values;
    use crate::config::{keys, DumpConfig};
    use tempfile::TempDir;

    #[test]
    fn test_generated_template_is_valid() {
        let raw = parse_key_values(&InitArgs::generate_config()).unwrap();
        let config = DumpConfig::from_raw(&raw).unwrap();

        assert_eq!(config.table_id.as_str(), "1");
        assert_eq!(config.page_size, 100);
    }

    #[test]
    fn test_generated_template_uses_only_known_keys() {
        let raw = parse_key_values(&InitArgs::generate_config()).unwrap();

        for key in raw.keys() {
            assert!(
                keys::REQUIRED.contains(&key) || keys::OPTIONAL.contains(&key),
                "unexpected key {key:?}"
            );
        }
        assert!(InitArgs::generate_config()
            .lines()
            .all(|line| !line.trim_start().starts_with('#')));
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("config.txt");
        fs::write(&output, "keep me").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");
    }

    #[tokio::test]
    async fn test_init_force_overwrites() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("config.txt");
        fs::write(&output, "old").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: true,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(fs::read_to_string(&output)
            .unwrap()
            .contains("server address"));
    }
}
