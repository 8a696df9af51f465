//! Employee Repository Port
//!
//! Every lookup except `find_all_employee_numbers` only sees active
//! (not soft-deleted) employees.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Employee, EmployeeFilter, NewEmployee, Page, PageRequest};

/// Repository interface for Employee entities
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find an active Employee by ID
    async fn find_active_by_id(&self, id: i64) -> Result<Option<Employee>, DomainError>;

    /// Find the active Employee holding an email address
    async fn find_active_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError>;

    /// Page through active Employees matching the filter, ordered by id
    async fn search_active(
        &self,
        filter: &EmployeeFilter,
        request: PageRequest,
    ) -> Result<Page<Employee>, DomainError>;

    /// Employee numbers of every row, soft-deleted ones included
    async fn find_all_employee_numbers(&self) -> Result<Vec<String>, DomainError>;

    /// Insert a new Employee; fails with `Conflict` on a uniqueness violation
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, DomainError>;

    /// Persist name, email, department and deletion state of an existing Employee
    async fn save(&self, employee: &Employee) -> Result<Employee, DomainError>;
}
