//! Roster API Routes
//!
//! - /api/v1/departments - Department lookup (read-only)
//! - /api/v1/employees - Employee management (soft delete)

pub mod department;
pub mod employee;
pub mod error;
pub mod extract;
pub mod swagger;
