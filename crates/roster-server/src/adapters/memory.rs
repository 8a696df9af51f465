//! In-memory store used by service and router tests
//!
//! Mirrors the Postgres adapter: active-only reads, partial uniqueness on
//! email and employee number, ids assigned in insertion order.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use roster::{
    Department, DepartmentRepository, DomainError, Employee, EmployeeFilter, EmployeeRepository,
    NewEmployee, Page, PageRequest,
};

#[derive(Default)]
struct Inner {
    departments: BTreeMap<i64, Department>,
    employees: BTreeMap<i64, Employee>,
    last_employee_id: i64,
}

impl Inner {
    fn check_unique(
        &self,
        id: Option<i64>,
        email: &str,
        employee_number: &str,
    ) -> Result<(), DomainError> {
        let others = self
            .employees
            .values()
            .filter(|e| e.is_active() && Some(e.id) != id);

        for other in others {
            if other.email == email {
                return Err(DomainError::Conflict(
                    "Email address is already in use".to_string(),
                ));
            }
            if other.employee_number == employee_number {
                return Err(DomainError::Conflict(
                    "Employee number is already assigned".to_string(),
                ));
            }
        }
        Ok(())
    }

    fn department(&self, id: i64) -> Result<Department, DomainError> {
        self.departments
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::Repository(format!("foreign key violation: department {id}")))
    }
}

/// Shared in-memory store implementing both repository ports
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn with_departments(departments: Vec<Department>) -> Self {
        let store = Self::default();
        store.lock().departments = departments.into_iter().map(|d| (d.id, d)).collect();
        store
    }

    /// Insert a row as-is, bypassing numbering and uniqueness checks
    pub fn seed_employee(&self, employee: Employee) {
        let mut inner = self.lock();
        inner.last_employee_id = inner.last_employee_id.max(employee.id);
        inner.employees.insert(employee.id, employee);
    }

    /// Raw row lookup, soft-deleted rows included
    pub fn raw_employee(&self, id: i64) -> Option<Employee> {
        self.lock().employees.get(&id).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("memory store lock poisoned")
    }
}

#[async_trait]
impl DepartmentRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Department>, DomainError> {
        Ok(self.lock().departments.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Department>, DomainError> {
        Ok(self.lock().departments.get(&id).cloned())
    }
}

#[async_trait]
impl EmployeeRepository for MemoryStore {
    async fn find_active_by_id(&self, id: i64) -> Result<Option<Employee>, DomainError> {
        Ok(self
            .lock()
            .employees
            .get(&id)
            .filter(|e| e.is_active())
            .cloned())
    }

    async fn find_active_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError> {
        Ok(self
            .lock()
            .employees
            .values()
            .find(|e| e.is_active() && e.email == email)
            .cloned())
    }

    async fn search_active(
        &self,
        filter: &EmployeeFilter,
        request: PageRequest,
    ) -> Result<Page<Employee>, DomainError> {
        let inner = self.lock();
        let matching: Vec<&Employee> = inner
            .employees
            .values()
            .filter(|e| e.is_active() && filter.matches(e))
            .collect();

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content = matching
            .iter()
            .skip(offset)
            .take(request.size() as usize)
            .map(|e| (*e).clone())
            .collect();

        Ok(Page::new(content, matching.len() as u64, request))
    }

    async fn find_all_employee_numbers(&self) -> Result<Vec<String>, DomainError> {
        Ok(self
            .lock()
            .employees
            .values()
            .map(|e| e.employee_number.clone())
            .collect())
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, DomainError> {
        let mut inner = self.lock();
        inner.check_unique(None, &employee.email, &employee.employee_number)?;
        let department = inner.department(employee.department_id)?;

        inner.last_employee_id += 1;
        let created = Employee {
            id: inner.last_employee_id,
            employee_number: employee.employee_number.clone(),
            name: employee.name.clone(),
            email: employee.email.clone(),
            department,
            join_date: employee.join_date,
            created_at: employee.created_at,
            updated_at: employee.created_at,
            deleted_at: None,
        };
        inner.employees.insert(created.id, created.clone());
        Ok(created)
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, DomainError> {
        let mut inner = self.lock();
        // Only active rows are writable
        if !inner
            .employees
            .get(&employee.id)
            .is_some_and(Employee::is_active)
        {
            return Err(DomainError::not_found("Employee", employee.id));
        }
        if employee.is_active() {
            inner.check_unique(Some(employee.id), &employee.email, &employee.employee_number)?;
        }
        let department = inner.department(employee.department.id)?;

        let stored = inner
            .employees
            .get_mut(&employee.id)
            .ok_or_else(|| DomainError::not_found("Employee", employee.id))?;
        stored.name = employee.name.clone();
        stored.email = employee.email.clone();
        stored.department = department;
        stored.updated_at = employee.updated_at;
        stored.deleted_at = employee.deleted_at;

        Ok(stored.clone())
    }
}
