//! Type-safe error codes for API responses.
//!
//! Each code carries a string identifier for clients (e.g. "VALIDATION_ERROR"),
//! an integer for logs and monitoring (e.g. 1001) and a default message.
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Query string could not be deserialized
    InvalidQuery,

    /// Requested resource was not found
    NotFound,

    /// An unexpected internal server error occurred
    InternalError,

    /// Malformed request not covered by a more specific code
    BadRequest,

    // Database errors (2000-2999)
    /// Database query or command failed
    DatabaseError,

    /// A stored document does not match the expected shape
    DatabaseDecode,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier for programmatic handling by clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabaseDecode => "DATABASE_DECODE",
        }
    }

    /// Integer code used in structured logs.
    ///
    /// - 1000-1999: Client errors
    /// - 2000-2999: Database errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidQuery => 1002,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::BadRequest => 1006,

            Self::DatabaseError => 2003,
            Self::DatabaseDecode => 2010,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidQuery => "Invalid query parameters",
            Self::NotFound => "Resource not found",
            Self::InternalError => "An internal server error occurred",
            Self::BadRequest => "Bad request",
            Self::DatabaseError => "Database error occurred",
            Self::DatabaseDecode => "Failed to decode database response",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::InvalidQuery.as_str(), "INVALID_QUERY");
        assert_eq!(ErrorCode::DatabaseDecode.as_str(), "DATABASE_DECODE");
    }

    #[test]
    fn test_error_code_integer_ranges() {
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert_eq!(ErrorCode::NotFound.code(), 1004);
        assert_eq!(ErrorCode::DatabaseError.code(), 2003);
        assert_eq!(ErrorCode::DatabaseDecode.code(), 2010);
    }

    #[test]
    fn test_error_code_display_matches_serde() {
        let code = ErrorCode::DatabaseDecode;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, format!("\"{}\"", code));

        let back: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }
}
