//! Domain Errors
//!
//! Error types for domain operations, and the stable error codes
//! clients receive for each kind.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} not found (id={id})")]
    NotFound { entity_type: String, id: String },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: i64) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    /// Error code reported to API clients for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::Validation(_) => ErrorCode::Validation,
            Self::Conflict(_) => ErrorCode::Duplicate,
            Self::Repository(_) => ErrorCode::Internal,
        }
    }
}

/// Client-facing error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Resource already exists (e.g. email held by an active employee)
    Duplicate,
    /// Malformed or missing input
    Validation,
    /// Referenced employee or department does not exist
    NotFound,
    /// Unexpected failure
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Duplicate => "ERR001",
            Self::Validation => "ERR003",
            Self::NotFound => "ERR004",
            Self::Internal => "ERR500",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
