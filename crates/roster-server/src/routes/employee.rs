//! Employee Routes - Staff record management
//!
//! HTTP handlers that validate input, then delegate to EmployeeService.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use roster::{EmployeeFilter, PageRequest};

use super::error::ApiError;
use super::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::models::{
    CreateEmployeeRequest, EmployeePageResponse, EmployeeResponse, ErrorResponse,
    ListEmployeesQuery, UpdateEmployeeRequest,
};
use crate::AppState;

/// List active Employees
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    params(ListEmployeesQuery),
    responses(
        (status = 200, description = "One page of active Employees", body = EmployeePageResponse),
        (status = 400, description = "Invalid paging parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListEmployeesQuery>,
) -> Result<Json<EmployeePageResponse>, ApiError> {
    let request = PageRequest::new(query.page, query.size)?;
    let filter = EmployeeFilter::new(query.name, query.department_id);

    let page = state.employee_service.list(filter, request).await?;
    Ok(Json(page.into()))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = state.employee_service.get_by_id(id).await?;
    Ok(Json(employee.into()))
}

/// Create new Employee
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Department not found", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), ApiError> {
    let fields = payload
        .into_fields()
        .ok_or_else(|| ApiError::validation("Required fields are missing"))?;

    let employee = state
        .employee_service
        .create(
            fields.name,
            fields.email,
            fields.department_id,
            fields.join_date,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(employee.into())))
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/api/v1/employees/{id}",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Employee or Department not found", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateEmployeeRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = state
        .employee_service
        .update(id, payload.name, payload.email, payload.department_id)
        .await?;

    Ok(Json(employee.into()))
}

/// Delete Employee (soft delete)
#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    state.employee_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/employees", get(list_employees).post(create_employee))
        .route(
            "/api/v1/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}
