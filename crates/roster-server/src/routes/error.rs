//! API error type
//!
//! Every handler returns `ApiError` on failure. It renders the JSON error
//! body with the status matching its error code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use validator::ValidationErrors;

use roster::{DomainError, ErrorCode};

use crate::models::ErrorResponse;

const INTERNAL_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Validation,
            message: message.into(),
        }
    }
}

/// HTTP status for an error code
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::Duplicate => StatusCode::CONFLICT,
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Repository(detail) => {
                tracing::error!(error = %detail, "Unexpected repository failure");
                Self {
                    code: ErrorCode::Internal,
                    message: INTERNAL_MESSAGE.to_string(),
                }
            }
            other => Self {
                code: other.code(),
                message: other.to_string(),
            },
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::validation(collect_messages(&errors))
    }
}

/// Join every field message into one line, ordered by field name
fn collect_messages(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(_, field_errors)| field_errors.iter())
        .map(|e| match &e.message {
            Some(message) => message.to_string(),
            None => e.code.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.code);
        if status.is_client_error() {
            tracing::warn!(code = %self.code, message = %self.message, "Request rejected");
        }

        let body = ErrorResponse::new(self.code.as_str(), self.message);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    use crate::models::CreateEmployeeRequest;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorCode::Duplicate), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorCode::Validation), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(ErrorCode::Internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_repository_error_hides_detail() {
        let err = ApiError::from(DomainError::Repository(
            "connection refused at 10.0.0.3".to_string(),
        ));
        assert_eq!(err.code, ErrorCode::Internal);
        assert_eq!(err.message, INTERNAL_MESSAGE);
    }

    #[test]
    fn test_domain_messages_pass_through() {
        let err = ApiError::from(DomainError::not_found("Employee", 999));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Employee not found (id=999)");
    }

    #[test]
    fn test_validation_messages_are_joined() {
        let request: CreateEmployeeRequest = serde_json::from_value(serde_json::json!({
            "email": "not-an-email",
            "departmentId": 1
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        let err = ApiError::from(errors);

        assert_eq!(err.code, ErrorCode::Validation);
        assert_eq!(
            err.message,
            "email must be a valid email address, joinDate is required, name is required"
        );
    }
}
