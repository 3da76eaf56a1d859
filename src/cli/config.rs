//! Configuration file
//!
//! JSON object, every field optional:
//!
//! ```json
//! {"max_input_len": 1000000, "log_level": "warn", "log_requests": false}
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::observability::Severity;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Requests whose input array is longer are rejected (default 10,000,000)
    #[serde(default = "default_max_input_len")]
    pub max_input_len: usize,

    /// Minimum log severity: trace, info, warn, error, fatal (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log begin/complete lines for every request (default true)
    #[serde(default = "default_log_requests")]
    pub log_requests: bool,
}

fn default_max_input_len() -> usize {
    10_000_000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_requests() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_input_len: default_max_input_len(),
            log_level: default_log_level(),
            log_requests: default_log_requests(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate field values
    pub fn validate(&self) -> CliResult<()> {
        if self.max_input_len == 0 {
            return Err(CliError::config_error("max_input_len must be > 0"));
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
}
