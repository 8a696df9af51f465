//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Department: Organizational unit, seeded out of band
//! - Employee: Staff record with soft-delete lifecycle

mod department;
mod employee;

pub use department::*;
pub use employee::*;
