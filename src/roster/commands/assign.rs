use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Department, EmployeeId};
use crate::registry::Registry;

pub fn run(registry: &mut Registry, id: EmployeeId, department: Department) -> Result<CmdResult> {
    let previous = registry.assign_department(id, department)?;

    let mut result = CmdResult::default();
    // The id was just resolved above, so the record is there.
    if let Some(employee) = registry.get(id) {
        if previous == department {
            result.add_message(CmdMessage::warning(format!(
                "{} is already in {}",
                employee.full_name(),
                department
            )));
        } else {
            result.add_message(CmdMessage::success(format!(
                "Employee assigned to department successfully: {} moved from {} to {}",
                employee.full_name(),
                previous,
                department
            )));
        }
        result.affected_employees.push(employee.clone());
    }
    Ok(result)
}
