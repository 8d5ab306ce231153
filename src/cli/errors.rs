//! CLI-specific error types
//!
//! All CLI errors are fatal: `main` prints them and exits non-zero.

use std::fmt;

use crate::dataset::LoadError;
use crate::http_server::ApiError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// Dataset could not be loaded
    LoadFailed,
    /// Invalid query arguments
    InvalidArguments,
    /// I/O error (stdout)
    IoError,
    /// Server failed to start or crashed
    BootFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "CSVAPI_CLI_CONFIG_ERROR",
            Self::LoadFailed => "CSVAPI_CLI_LOAD_FAILED",
            Self::InvalidArguments => "CSVAPI_CLI_INVALID_ARGUMENTS",
            Self::IoError => "CSVAPI_CLI_IO_ERROR",
            Self::BootFailed => "CSVAPI_CLI_BOOT_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidArguments, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<LoadError> for CliError {
    fn from(err: LoadError) -> Self {
        Self::new(CliErrorCode::LoadFailed, err.to_string())
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        Self::invalid_arguments(err.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::config_error("missing csv_file_path");
        assert_eq!(
            err.to_string(),
            "CSVAPI_CLI_CONFIG_ERROR: missing csv_file_path"
        );
    }

    #[test]
    fn test_from_load_error() {
        let err = CliError::from(LoadError::Empty);
        assert_eq!(err.code(), &CliErrorCode::LoadFailed);
        assert!(err.message().contains("no columns"));
    }

    #[test]
    fn test_from_api_error() {
        let err = CliError::from(ApiError::validation("page must be >= 1"));
        assert_eq!(err.code(), &CliErrorCode::InvalidArguments);
    }
}
