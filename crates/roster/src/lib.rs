//! Roster Domain Library
//!
//! Core domain types and interfaces for the Roster employee records service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Department, Employee)
//!   - `value_objects/`: Immutable value types (EmployeeNumber, Page, PageRequest)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use roster::domain::{Department, Employee};
//! use roster::ports::{DepartmentRepository, EmployeeRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Department, DomainError, Employee, EmployeeFilter, EmployeeNumber, ErrorCode, NewEmployee,
    Page, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use ports::{DepartmentRepository, EmployeeRepository};
