//! Error response body

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Error body returned with every non-2xx response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[schema(example = "ERR004")]
    pub error_code: String,
    #[schema(example = "Employee not found (id=999)")]
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}
