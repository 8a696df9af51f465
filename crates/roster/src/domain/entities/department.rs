//! Department - Organizational Unit
//!
//! Read-only within this system; rows are provisioned by seed migrations.

use serde::{Deserialize, Serialize};

/// Department a staff member belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub code: String,
}
