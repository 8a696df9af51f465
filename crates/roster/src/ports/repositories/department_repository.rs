//! Department Repository Port
//!
//! Read-only access to Department records.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Department};

/// Repository interface for Department entities
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Find all Departments, ordered by id
    async fn find_all(&self) -> Result<Vec<Department>, DomainError>;

    /// Find a Department by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Department>, DomainError>;
}
