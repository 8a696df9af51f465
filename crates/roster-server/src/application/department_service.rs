//! Department Application Service (Use Case)
//!
//! Read-only access to departments.

use std::sync::Arc;

use roster::{Department, DepartmentRepository, DomainError};

/// Application service for Department operations
pub struct DepartmentService<R: DepartmentRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: DepartmentRepository + ?Sized> DepartmentService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all Departments
    pub async fn list_all(&self) -> Result<Vec<Department>, DomainError> {
        let departments = self.repo.find_all().await?;
        tracing::debug!(count = departments.len(), "Listed departments");
        Ok(departments)
    }

    /// Get a Department by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Department, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Department", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;

    fn service() -> DepartmentService<MemoryStore> {
        let store = MemoryStore::with_departments(vec![
            Department {
                id: 2,
                name: "Engineering".to_string(),
                code: "ENG".to_string(),
            },
            Department {
                id: 1,
                name: "Sales".to_string(),
                code: "SALES".to_string(),
            },
        ]);
        DepartmentService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_list_all_orders_by_id() {
        let departments = service().list_all().await.unwrap();
        let codes: Vec<_> = departments.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(codes, vec!["SALES", "ENG"]);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let department = service().get_by_id(2).await.unwrap();
        assert_eq!(department.name, "Engineering");
    }

    #[tokio::test]
    async fn test_get_missing_department() {
        let err = service().get_by_id(99).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
