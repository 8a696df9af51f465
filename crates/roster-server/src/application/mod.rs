//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories.

mod department_service;
mod employee_service;

pub use department_service::DepartmentService;
pub use employee_service::EmployeeService;
