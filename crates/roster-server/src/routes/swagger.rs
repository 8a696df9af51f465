//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CreateEmployeeRequest, DepartmentResponse, EmployeePageResponse, EmployeeResponse,
    ErrorResponse, UpdateEmployeeRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Department endpoints
        super::department::list_departments,
        super::department::get_department,
        // Employee endpoints
        super::employee::list_employees,
        super::employee::get_employee,
        super::employee::create_employee,
        super::employee::update_employee,
        super::employee::delete_employee,
    ),
    info(
        title = "Roster API",
        version = "0.1.0",
        description = "Employee records service: employees with soft delete, read-only departments.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Department", description = "Department lookup"),
        (name = "Employee", description = "Employee records management"),
    ),
    components(
        schemas(
            // Department
            DepartmentResponse,
            // Employee
            CreateEmployeeRequest,
            UpdateEmployeeRequest,
            EmployeeResponse,
            EmployeePageResponse,
            // Errors
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        assert!(paths.contains(&"/api/v1/departments".to_string()));
        assert!(paths.contains(&"/api/v1/departments/{id}".to_string()));
        assert!(paths.contains(&"/api/v1/employees".to_string()));
        assert!(paths.contains(&"/api/v1/employees/{id}".to_string()));
    }
}
