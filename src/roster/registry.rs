//! # Employee Registry
//!
//! The registry is the sole owner of employee records. It guarantees that no two
//! records share an id and exposes the only ways to mutate the collection.
//!
//! Records are kept in insertion order, which is also the order listings use.
//! The population size is always read off the collection itself; nothing keeps
//! a separate counter that could drift.
//!
//! Routine outcomes (a taken id on add, an unknown id on remove or assign) come
//! back as [`RosterError::DuplicateId`] / [`RosterError::NotFound`]. Nothing in
//! here panics for them and nothing here performs I/O.

use crate::error::{RosterError, Result};
use crate::model::{Department, Employee, EmployeeId};
use crate::validation::{validate_name, validate_salary};
use tracing::debug;

#[derive(Debug, Default)]
pub struct Registry {
    employees: Vec<Employee>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record. Blank names, a negative or non-finite salary and a taken id
    /// are all rejected, and the registry is left as it was. Names are stored trimmed.
    pub fn add(&mut self, mut employee: Employee) -> Result<()> {
        employee.first_name = validate_name("First name", &employee.first_name)?;
        employee.last_name = validate_name("Last name", &employee.last_name)?;
        validate_salary(employee.salary)?;
        if self.contains(employee.id()) {
            return Err(RosterError::DuplicateId(employee.id()));
        }
        debug!(id = employee.id(), department = %employee.department, "adding employee");
        self.employees.push(employee);
        Ok(())
    }

    /// Removes and returns the record. Removing an unknown id is always `NotFound`.
    pub fn remove(&mut self, id: EmployeeId) -> Result<Employee> {
        let pos = self.position(id).ok_or(RosterError::NotFound(id))?;
        debug!(id, "removing employee");
        Ok(self.employees.remove(pos))
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id() == id)
    }

    /// Moves an employee to `department`, returning the department they left.
    pub fn assign_department(
        &mut self,
        id: EmployeeId,
        department: Department,
    ) -> Result<Department> {
        let employee = self.get_mut(id)?;
        let previous = std::mem::replace(&mut employee.department, department);
        debug!(id, from = %previous, to = %department, "assigned department");
        Ok(previous)
    }

    /// Replaces an employee's salary, returning the old one.
    pub fn set_salary(&mut self, id: EmployeeId, salary: f64) -> Result<f64> {
        let salary = validate_salary(salary)?;
        let employee = self.get_mut(id)?;
        let previous = std::mem::replace(&mut employee.salary, salary);
        debug!(id, previous, salary, "updated salary");
        Ok(previous)
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Snapshot of all records in insertion order. Mutating it does not touch the registry.
    pub fn list(&self) -> Vec<Employee> {
        self.employees.clone()
    }

    pub fn total_salary(&self) -> f64 {
        self.employees.iter().map(|e| e.salary).sum()
    }

    /// Every department paired with its display index. Independent of registry content.
    pub fn department_catalog() -> [(usize, Department); 7] {
        Department::ALL.map(|d| (d.index(), d))
    }

    /// Current headcount of every department, in catalog order (empty departments included).
    pub fn department_headcount(&self) -> Vec<(Department, usize)> {
        Department::ALL
            .iter()
            .map(|&d| {
                let count = self.employees.iter().filter(|e| e.department == d).count();
                (d, count)
            })
            .collect()
    }

    fn position(&self, id: EmployeeId) -> Option<usize> {
        self.employees.iter().position(|e| e.id() == id)
    }

    fn get_mut(&mut self, id: EmployeeId) -> Result<&mut Employee> {
        self.employees
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(RosterError::NotFound(id))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct RegistryFixture {
        pub registry: Registry,
    }

    impl Default for RegistryFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RegistryFixture {
        pub fn new() -> Self {
            Self {
                registry: Registry::new(),
            }
        }

        /// Adds `count` employees with ids 1..=count, salary 1000 * id, all in IT.
        pub fn with_employees(mut self, count: usize) -> Self {
            for i in 1..=count {
                let id = i as EmployeeId;
                let emp = Employee::new(
                    id,
                    format!("First{}", i),
                    format!("Last{}", i),
                    1000.0 * i as f64,
                    Department::IT,
                );
                self.registry.add(emp).unwrap();
            }
            self
        }

        pub fn with_employee(
            mut self,
            id: EmployeeId,
            first: &str,
            last: &str,
            salary: f64,
            department: Department,
        ) -> Self {
            self.registry
                .add(Employee::new(id, first, last, salary, department))
                .unwrap();
            self
        }

        /// Ann Lee (1, IT, 50000) and Bo Tan (2, HR, 60000).
        pub fn with_ann_and_bo(self) -> Self {
            self.with_employee(1, "Ann", "Lee", 50000.0, Department::IT)
                .with_employee(2, "Bo", "Tan", 60000.0, Department::HR)
        }
    }
}
