//! Employee DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use roster::{Employee, Page, DEFAULT_PAGE_SIZE};

use super::DepartmentResponse;

// ============================================
// Request DTOs
// ============================================

/// Create Employee request.
///
/// Every field is required; they are optional here so that a missing field
/// reports through validation along with the others.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[validate(
        required(message = "name is required"),
        custom(function = "not_blank", message = "name is required"),
        length(min = 1, max = 100, message = "name must be between 1 and 100 characters")
    )]
    #[schema(example = "Taro Yamada")]
    pub name: Option<String>,

    #[validate(
        required(message = "email is required"),
        custom(function = "not_blank", message = "email is required"),
        email(message = "email must be a valid email address")
    )]
    #[schema(example = "taro@example.com")]
    pub email: Option<String>,

    #[validate(required(message = "departmentId is required"))]
    #[schema(example = 1)]
    pub department_id: Option<i64>,

    #[validate(required(message = "joinDate is required"))]
    #[schema(value_type = Option<String>, format = Date, example = "2024-01-01")]
    pub join_date: Option<NaiveDate>,
}

/// Fields of a validated create request
pub struct CreateEmployeeFields {
    pub name: String,
    pub email: String,
    pub department_id: i64,
    pub join_date: NaiveDate,
}

impl CreateEmployeeRequest {
    /// Required fields; `None` if any is missing.
    ///
    /// The `required` checks reject missing fields first, so a validated
    /// request always yields `Some`.
    pub fn into_fields(self) -> Option<CreateEmployeeFields> {
        Some(CreateEmployeeFields {
            name: self.name?,
            email: self.email?,
            department_id: self.department_id?,
            join_date: self.join_date?,
        })
    }
}

/// Rejects values made only of whitespace
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Update Employee request; absent fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[validate(
        custom(function = "not_blank", message = "name must not be blank"),
        length(min = 1, max = 100, message = "name must be between 1 and 100 characters")
    )]
    pub name: Option<String>,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,

    pub department_id: Option<i64>,
}

/// Query parameters for the employee list
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListEmployeesQuery {
    /// Zero-based page number
    #[serde(default)]
    pub page: u32,
    /// Page size (1 to 1000)
    #[serde(default = "default_page_size")]
    pub size: u32,
    /// Substring of the employee name (case-sensitive)
    pub name: Option<String>,
    /// Exact department id
    pub department_id: Option<i64>,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

// ============================================
// Response DTOs
// ============================================

/// Employee response with its department embedded
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: i64,
    #[schema(example = "EMP001")]
    pub employee_number: String,
    pub name: String,
    pub email: String,
    pub department: DepartmentResponse,
    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    pub join_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            employee_number: employee.employee_number,
            name: employee.name,
            email: employee.email,
            department: employee.department.into(),
            join_date: employee.join_date,
            created_at: employee.created_at,
        }
    }
}

/// One page of employees
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePageResponse {
    pub content: Vec<EmployeeResponse>,
    pub total_elements: u64,
    pub total_pages: u64,
    /// Zero-based page number
    pub number: u32,
    pub size: u32,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl From<Page<Employee>> for EmployeePageResponse {
    fn from(page: Page<Employee>) -> Self {
        let page = page.map(EmployeeResponse::from);

        Self {
            total_elements: page.total_elements,
            total_pages: page.total_pages(),
            number: page.number(),
            size: page.size(),
            number_of_elements: page.content.len(),
            first: page.is_first(),
            last: page.is_last(),
            empty: page.content.is_empty(),
            content: page.content,
        }
    }
}
