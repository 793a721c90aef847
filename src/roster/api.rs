//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! roster operation, whatever UI sits on top.
//!
//! The facade owns the [`Registry`] and:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`, `bool`, `Option`)
//!
//! It does no formatting and no I/O. Business rules live in `commands/*.rs`
//! and the registry; tests here only check that calls land where they should.

use crate::commands;
use crate::error::Result;
use crate::model::{Department, Employee, EmployeeId};
use crate::registry::Registry;

#[derive(Debug, Default)]
pub struct RosterApi {
    registry: Registry,
}

impl RosterApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn add_employee(&mut self, employee: Employee) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.registry, employee)
    }

    pub fn remove_employee(&mut self, id: EmployeeId) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.registry, id)
    }

    pub fn employee_exists(&self, id: EmployeeId) -> bool {
        self.registry.contains(id)
    }

    pub fn get_employee(&self, id: EmployeeId) -> Result<commands::CmdResult> {
        commands::get::run(&self.registry, id)
    }

    pub fn assign_department(
        &mut self,
        id: EmployeeId,
        department: Department,
    ) -> Result<commands::CmdResult> {
        commands::assign::run(&mut self.registry, id, department)
    }

    pub fn update_salary(&mut self, id: EmployeeId, salary: f64) -> Result<commands::CmdResult> {
        commands::salary::update(&mut self.registry, id, salary)
    }

    pub fn list_employees(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.registry)
    }

    pub fn total_salary(&self) -> Result<commands::CmdResult> {
        commands::salary::total(&self.registry)
    }

    pub fn departments(&self) -> Result<commands::CmdResult> {
        commands::departments::run()
    }

    pub fn summary(&self) -> Result<commands::CmdResult> {
        commands::summary::run(&self.registry)
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::registry::fixtures::RegistryFixture;

    fn api() -> RosterApi {
        RosterApi::with_registry(RegistryFixture::new().with_ann_and_bo().registry)
    }

    #[test]
    fn add_dispatches_to_registry() {
        let mut api = RosterApi::new();
        assert!(api.is_empty());

        api.add_employee(Employee::new(3, "Cy", "Ng", 1.0, Department::Sales))
            .unwrap();

        assert!(api.employee_exists(3));
        assert!(!api.is_empty());
    }

    #[test]
    fn remove_and_lookup() {
        let mut api = api();
        api.remove_employee(1).unwrap();
        assert!(!api.employee_exists(1));
        assert!(matches!(api.get_employee(1), Err(RosterError::NotFound(1))));
        assert!(matches!(api.remove_employee(1), Err(RosterError::NotFound(1))));
    }

    #[test]
    fn assign_and_update() {
        let mut api = api();
        api.assign_department(2, Department::Operations).unwrap();
        api.update_salary(2, 1.0).unwrap();

        let bo = api.registry().get(2).unwrap();
        assert_eq!(bo.department, Department::Operations);
        assert_eq!(bo.salary, 1.0);
    }

    #[test]
    fn reports() {
        let api = api();
        assert_eq!(api.list_employees().unwrap().listed_employees.len(), 2);
        assert_eq!(api.total_salary().unwrap().total_salary, Some(110000.0));
        assert_eq!(api.departments().unwrap().departments.len(), 7);
        assert_eq!(api.summary().unwrap().headcount.len(), 7);
    }
}
