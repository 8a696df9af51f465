//! Roster API Data Models
//!
//! Request/response DTOs. JSON field names are camelCase.
//! - Department: read-only reference data
//! - Employee: create/update requests, responses, page envelope
//! - Error: error body shared by every endpoint

mod department;
mod employee;
mod error;

pub use department::*;
pub use employee::*;
pub use error::*;
