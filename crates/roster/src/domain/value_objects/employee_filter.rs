//! Employee search filter

use crate::domain::Employee;

/// Optional search conditions, combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    /// Case-sensitive substring of the employee name
    pub name: Option<String>,
    /// Exact department id
    pub department_id: Option<i64>,
}

impl EmployeeFilter {
    pub fn new(name: Option<String>, department_id: Option<i64>) -> Self {
        Self {
            name,
            department_id,
        }
    }

    /// Whether the employee satisfies every present condition.
    ///
    /// Does not look at the soft-delete state.
    pub fn matches(&self, employee: &Employee) -> bool {
        let name_ok = self
            .name
            .as_deref()
            .map_or(true, |needle| employee.name.contains(needle));
        let department_ok = self
            .department_id
            .map_or(true, |id| employee.department.id == id);

        name_ok && department_ok
    }
}
