//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod department_repository;
mod employee_repository;

pub use department_repository::*;
pub use employee_repository::*;
