//! Employee - Staff Record
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Department;

/// Employee with its department resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_number: String,
    pub name: String,
    pub email: String,
    pub department: Department,
    pub join_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set once the record is soft-deleted; `None` means active
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Employee {
    /// Whether the record is still active (not soft-deleted)
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Soft-delete the record at the given instant
    pub fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.deleted_at = Some(at);
        self.updated_at = at;
    }
}

/// Employee data ahead of insertion; the store assigns the id
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub employee_number: String,
    pub name: String,
    pub email: String,
    pub department_id: i64,
    pub join_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl NewEmployee {
    pub fn new(
        employee_number: String,
        name: String,
        email: String,
        department_id: i64,
        join_date: NaiveDate,
    ) -> Self {
        Self {
            employee_number,
            name,
            email,
            department_id,
            join_date,
            created_at: Utc::now(),
        }
    }
}
