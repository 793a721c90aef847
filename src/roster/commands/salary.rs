use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EmployeeId;
use crate::registry::Registry;

pub fn total(registry: &Registry) -> Result<CmdResult> {
    Ok(CmdResult::default().with_total_salary(registry.total_salary()))
}

pub fn update(registry: &mut Registry, id: EmployeeId, salary: f64) -> Result<CmdResult> {
    let previous = registry.set_salary(id, salary)?;

    let mut result = CmdResult::default();
    if let Some(employee) = registry.get(id) {
        result.add_message(CmdMessage::success(format!(
            "Salary of {} changed from {} to {}",
            employee.full_name(),
            previous,
            salary
        )));
        result.affected_employees.push(employee.clone());
    }
    Ok(result)
}
