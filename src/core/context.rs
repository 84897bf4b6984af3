use crate::models::{Employee, ExceptionDate, Service, WeekSchedule};

/// Read-only snapshot of the business configuration.
///
/// The validator and the mutation logic receive it explicitly; nothing in
/// `core` reaches for global state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusinessContext {
    pub week: WeekSchedule,
    pub exceptions: Vec<ExceptionDate>,
    pub employees: Vec<Employee>,
    pub services: Vec<Service>,
}

impl BusinessContext {
    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Display name for an employee id, falling back to the id itself.
    pub fn employee_name(&self, id: &str) -> String {
        self.employee(id)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}
