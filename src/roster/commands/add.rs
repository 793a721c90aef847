use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Employee;
use crate::registry::Registry;

pub fn run(registry: &mut Registry, employee: Employee) -> Result<CmdResult> {
    let id = employee.id();
    registry.add(employee)?;

    let mut result = CmdResult::default();
    // Report the stored record, names trimmed.
    if let Some(stored) = registry.get(id) {
        result.add_message(CmdMessage::success(format!(
            "Employee added successfully: {} {}",
            id,
            stored.full_name()
        )));
        result.affected_employees.push(stored.clone());
    }
    Ok(result)
}
