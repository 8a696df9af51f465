//! Value Objects
//!
//! Immutable types that carry domain rules.

mod employee_filter;
mod employee_number;
mod page;

pub use employee_filter::*;
pub use employee_number::*;
pub use page::*;
