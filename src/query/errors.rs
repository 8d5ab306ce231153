//! Query error types
//!
//! Only two query operations can fail. Everything else in a records query
//! degrades silently.

use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Query errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Record id outside the accepted range
    #[error("Record not found")]
    NotFound(i64),

    /// Column search on a column the dataset does not have
    #[error("Column '{0}' not found")]
    InvalidColumn(String),
}

impl QueryError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::NotFound(_) => "CSVAPI_RECORD_NOT_FOUND",
            QueryError::InvalidColumn(_) => "CSVAPI_INVALID_COLUMN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(QueryError::NotFound(7).to_string(), "Record not found");
        assert_eq!(
            QueryError::InvalidColumn("zip".to_string()).to_string(),
            "Column 'zip' not found"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(QueryError::NotFound(0).code(), "CSVAPI_RECORD_NOT_FOUND");
        assert_eq!(
            QueryError::InvalidColumn(String::new()).code(),
            "CSVAPI_INVALID_COLUMN"
        );
    }
}
