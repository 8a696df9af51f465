//! PostgreSQL implementation of EmployeeRepository
//!
//! Active-only reads filter on `deleted_at IS NULL`. Uniqueness of email and
//! employee number among active rows is enforced by partial unique indexes.
//! Writes to an existing row only touch it while it is still active.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Postgres, Transaction};

use roster::{
    Department, DomainError, Employee, EmployeeFilter, EmployeeRepository, NewEmployee, Page,
    PageRequest,
};

const SELECT_EMPLOYEE: &str = r#"
    SELECT e.id, e.employee_number, e.name, e.email, e.join_date,
           e.created_at, e.updated_at, e.deleted_at,
           d.id AS department_id, d.name AS department_name, d.code AS department_code
    FROM employees e
    JOIN departments d ON d.id = e.department_id
"#;

const SEARCH_CONDITIONS: &str = r#"
    WHERE e.deleted_at IS NULL
      AND ($1::text IS NULL OR strpos(e.name, $1) > 0)
      AND ($2::bigint IS NULL OR e.department_id = $2)
"#;

const ACTIVE_EMAIL_INDEX: &str = "employees_active_email_key";
const ACTIVE_NUMBER_INDEX: &str = "employees_active_number_key";

/// PostgreSQL implementation of EmployeeRepository
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_by_id(
        tx: &mut Transaction<'_, Postgres>,
        id: i64,
    ) -> Result<Employee, DomainError> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!("{SELECT_EMPLOYEE} WHERE e.id = $1"))
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?
            .ok_or_else(|| DomainError::not_found("Employee", id))?;

        Ok(row.into())
    }
}

/// Internal row type for sqlx mapping (employee joined with its department)
#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    employee_number: String,
    name: String,
    email: String,
    join_date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
    department_id: i64,
    department_name: String,
    department_code: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            employee_number: row.employee_number,
            name: row.name,
            email: row.email,
            department: Department {
                id: row.department_id,
                name: row.department_name,
                code: row.department_code,
            },
            join_date: row.join_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

/// Map write failures, turning unique violations into `Conflict`
fn map_write_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return match db.constraint() {
                Some(ACTIVE_EMAIL_INDEX) => {
                    DomainError::Conflict("Email address is already in use".to_string())
                }
                Some(ACTIVE_NUMBER_INDEX) => {
                    DomainError::Conflict("Employee number is already assigned".to_string())
                }
                _ => DomainError::Conflict("Employee already exists".to_string()),
            };
        }
    }
    DomainError::Repository(err.to_string())
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_active_by_id(&self, id: i64) -> Result<Option<Employee>, DomainError> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!(
            "{SELECT_EMPLOYEE} WHERE e.id = $1 AND e.deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_active_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!(
            "{SELECT_EMPLOYEE} WHERE e.email = $1 AND e.deleted_at IS NULL"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn search_active(
        &self,
        filter: &EmployeeFilter,
        request: PageRequest,
    ) -> Result<Page<Employee>, DomainError> {
        // Count and slice from one snapshot
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM employees e {SEARCH_CONDITIONS}"
        ))
        .bind(filter.name.as_deref())
        .bind(filter.department_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        let rows = sqlx::query_as::<_, EmployeeRow>(&format!(
            "{SELECT_EMPLOYEE} {SEARCH_CONDITIONS} ORDER BY e.id LIMIT $3 OFFSET $4"
        ))
        .bind(filter.name.as_deref())
        .bind(filter.department_id)
        .bind(i64::from(request.size()))
        .bind(i64::try_from(request.offset()).unwrap_or(i64::MAX))
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        let content = rows.into_iter().map(Into::into).collect();
        Ok(Page::new(content, u64::try_from(total).unwrap_or(0), request))
    }

    async fn find_all_employee_numbers(&self) -> Result<Vec<String>, DomainError> {
        sqlx::query_scalar::<_, String>("SELECT employee_number FROM employees")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO employees
                (employee_number, name, email, department_id, join_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING id
            "#,
        )
        .bind(&employee.employee_number)
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(employee.department_id)
        .bind(employee.join_date)
        .bind(employee.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_write_error)?;

        let inserted = Self::fetch_by_id(&mut tx, id).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(inserted)
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        let result = sqlx::query(
            r#"
            UPDATE employees
            SET name = $2, email = $3, department_id = $4, updated_at = $5, deleted_at = $6
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(employee.id)
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(employee.department.id)
        .bind(employee.updated_at)
        .bind(employee.deleted_at)
        .execute(&mut *tx)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Employee", employee.id));
        }

        let saved = Self::fetch_by_id(&mut tx, employee.id).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(saved)
    }
}
