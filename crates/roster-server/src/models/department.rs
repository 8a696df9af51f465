//! Department DTOs

use serde::Serialize;
use utoipa::ToSchema;

use roster::Department;

/// Department response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DepartmentResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Sales")]
    pub name: String,
    #[schema(example = "SALES")]
    pub code: String,
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self {
            id: department.id,
            name: department.name,
            code: department.code,
        }
    }
}
