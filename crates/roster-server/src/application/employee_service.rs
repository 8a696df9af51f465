//! Employee Application Service (Use Case)
//!
//! Orchestrates domain operations for employee management: uniqueness and
//! department checks, employee numbering, soft delete.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use roster::{
    Department, DepartmentRepository, DomainError, Employee, EmployeeFilter, EmployeeNumber,
    EmployeeRepository, NewEmployee, Page, PageRequest,
};

const DUPLICATE_EMAIL: &str = "Email address is already in use";

/// Application service for Employee operations
pub struct EmployeeService<E, D>
where
    E: EmployeeRepository + ?Sized,
    D: DepartmentRepository + ?Sized,
{
    employees: Arc<E>,
    departments: Arc<D>,
}

impl<E, D> EmployeeService<E, D>
where
    E: EmployeeRepository + ?Sized,
    D: DepartmentRepository + ?Sized,
{
    pub fn new(employees: Arc<E>, departments: Arc<D>) -> Self {
        Self {
            employees,
            departments,
        }
    }

    /// Page through active Employees, optionally filtered
    pub async fn list(
        &self,
        filter: EmployeeFilter,
        request: PageRequest,
    ) -> Result<Page<Employee>, DomainError> {
        tracing::info!(
            page = request.page(),
            size = request.size(),
            name = ?filter.name,
            department_id = ?filter.department_id,
            "Listing employees"
        );

        let page = self.employees.search_active(&filter, request).await?;

        tracing::info!(total = page.total_elements, "Listed employees");
        Ok(page)
    }

    /// Get an active Employee by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Employee, DomainError> {
        self.require_active(id).await
    }

    /// Create a new Employee with the next employee number
    pub async fn create(
        &self,
        name: String,
        email: String,
        department_id: i64,
        join_date: NaiveDate,
    ) -> Result<Employee, DomainError> {
        tracing::info!(%email, department_id, "Creating employee");

        if self.employees.find_active_by_email(&email).await?.is_some() {
            return Err(DomainError::Conflict(DUPLICATE_EMAIL.to_string()));
        }

        let department = self.require_department(department_id).await?;
        let employee_number = self.next_employee_number().await?;

        let new_employee = NewEmployee::new(
            employee_number.to_string(),
            name,
            email,
            department.id,
            join_date,
        );
        let created = self.employees.insert(&new_employee).await?;

        tracing::info!(
            id = created.id,
            employee_number = %created.employee_number,
            "Created employee"
        );

        Ok(created)
    }

    /// Update the provided fields of an active Employee
    pub async fn update(
        &self,
        id: i64,
        name: Option<String>,
        email: Option<String>,
        department_id: Option<i64>,
    ) -> Result<Employee, DomainError> {
        tracing::info!(id, "Updating employee");

        let mut employee = self.require_active(id).await?;

        if let Some(email) = email {
            if email != employee.email {
                if self.employees.find_active_by_email(&email).await?.is_some() {
                    return Err(DomainError::Conflict(DUPLICATE_EMAIL.to_string()));
                }
                employee.email = email;
            }
        }

        if let Some(name) = name {
            employee.name = name;
        }

        if let Some(department_id) = department_id {
            employee.department = self.require_department(department_id).await?;
        }

        employee.updated_at = Utc::now();
        let saved = self.employees.save(&employee).await?;

        tracing::info!(id, "Updated employee");
        Ok(saved)
    }

    /// Soft-delete an active Employee
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut employee = self.require_active(id).await?;

        employee.mark_deleted(Utc::now());
        self.employees.save(&employee).await?;

        tracing::info!(id, employee_number = %employee.employee_number, "Deleted employee");
        Ok(())
    }

    async fn require_active(&self, id: i64) -> Result<Employee, DomainError> {
        self.employees
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Employee", id))
    }

    async fn require_department(&self, id: i64) -> Result<Department, DomainError> {
        self.departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Department", id))
    }

    /// Max numeric suffix over every employee, deleted ones included, plus one
    async fn next_employee_number(&self) -> Result<EmployeeNumber, DomainError> {
        let existing = self.employees.find_all_employee_numbers().await?;
        Ok(EmployeeNumber::next_after(existing))
    }
}
