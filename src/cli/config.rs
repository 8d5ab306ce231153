//! Service configuration
//!
//! Optional JSON file; every field has a default. Command-line flags and the
//! `CSV_FILE_PATH` environment variable take precedence over the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::observability::Severity;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// CSV file loaded at startup (default: "data.csv")
    #[serde(default = "default_csv_file_path")]
    pub csv_file_path: String,

    /// Minimum log level (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Listener and CORS settings
    #[serde(flatten)]
    pub server: HttpServerConfig,
}

fn default_csv_file_path() -> String {
    "data.csv".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            csv_file_path: default_csv_file_path(),
            log_level: default_log_level(),
            server: HttpServerConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: ServiceConfig = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.csv_file_path.is_empty() {
            return Err(CliError::config_error("csv_file_path must not be empty"));
        }

        if self.server.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        self.severity()?;
        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse::<Severity>()
            .map_err(CliError::config_error)
    }

    /// Get the CSV path
    pub fn csv_path(&self) -> PathBuf {
        PathBuf::from(&self.csv_file_path)
    }
}
