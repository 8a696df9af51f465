//! PostgreSQL implementation of DepartmentRepository

use async_trait::async_trait;
use sqlx::PgPool;

use roster::{Department, DepartmentRepository, DomainError};

/// PostgreSQL implementation of DepartmentRepository
pub struct PgDepartmentRepository {
    pool: PgPool,
}

impl PgDepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct DepartmentRow {
    id: i64,
    name: String,
    code: String,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            code: row.code,
        }
    }
}

#[async_trait]
impl DepartmentRepository for PgDepartmentRepository {
    async fn find_all(&self) -> Result<Vec<Department>, DomainError> {
        let rows = sqlx::query_as::<_, DepartmentRow>(
            "SELECT id, name, code FROM departments ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Department>, DomainError> {
        let row = sqlx::query_as::<_, DepartmentRow>(
            "SELECT id, name, code FROM departments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }
}
