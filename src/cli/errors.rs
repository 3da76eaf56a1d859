//! CLI-specific error types
//!
//! CLI errors stop the process; request-level failures are reported as
//! error responses instead and never surface here.

use std::io;

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// Errors that end a CLI invocation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Configuration file missing, malformed or out of range
    #[error("FILTER_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// stdin/stdout failure
    #[error("FILTER_CLI_IO_ERROR: {0}")]
    Io(String),
}

impl CliError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Stable error code string
    pub fn code_str(&self) -> &'static str {
        match self {
            Self::Config(_) => "FILTER_CLI_CONFIG_ERROR",
            Self::Io(_) => "FILTER_CLI_IO_ERROR",
        }
    }

    /// Message without the code prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Config(msg) | Self::Io(msg) => msg,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Io(format!("JSON error: {}", e))
    }
}
