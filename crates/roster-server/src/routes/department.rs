//! Department Routes - Read-only department lookup
//!
//! HTTP handlers that delegate to DepartmentService.

use axum::{extract::State, routing::get, Json, Router};

use super::error::ApiError;
use super::extract::ApiPath;
use crate::models::{DepartmentResponse, ErrorResponse};
use crate::AppState;

/// List all Departments
#[utoipa::path(
    get,
    path = "/api/v1/departments",
    responses(
        (status = 200, description = "List of all Departments", body = Vec<DepartmentResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Department"
)]
pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentResponse>>, ApiError> {
    let departments = state.department_service.list_all().await?;
    Ok(Json(departments.into_iter().map(Into::into).collect()))
}

/// Get Department by ID
#[utoipa::path(
    get,
    path = "/api/v1/departments/{id}",
    params(
        ("id" = i64, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department found", body = DepartmentResponse),
        (status = 404, description = "Department not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Department"
)]
pub async fn get_department(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<DepartmentResponse>, ApiError> {
    let department = state.department_service.get_by_id(id).await?;
    Ok(Json(department.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/departments", get(list_departments))
        .route("/api/v1/departments/:id", get(get_department))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::super::testing::{send, TestApp};

    #[tokio::test]
    async fn test_list_departments() {
        let app = TestApp::new();
        let (status, body) = send(&app, "GET", "/api/v1/departments", None).await;

        assert_eq!(status, StatusCode::OK);
        let departments = body.as_array().unwrap();
        assert_eq!(departments.len(), 2);
        assert_eq!(
            departments[0],
            serde_json::json!({ "id": 1, "name": "Sales", "code": "SALES" })
        );
    }

    #[tokio::test]
    async fn test_get_department() {
        let app = TestApp::new();
        let (status, body) = send(&app, "GET", "/api/v1/departments/5", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], "ENG");
    }

    #[tokio::test]
    async fn test_get_missing_department() {
        let app = TestApp::new();
        let (status, body) = send(&app, "GET", "/api/v1/departments/404", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errorCode"], "ERR004");
    }
}
