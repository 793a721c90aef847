use crate::commands::{CmdMessage, CmdResult, EMPTY_REGISTRY_MESSAGE};
use crate::error::Result;
use crate::registry::Registry;

/// Headcount per department plus the salary total.
pub fn run(registry: &Registry) -> Result<CmdResult> {
    let mut result = CmdResult::default()
        .with_headcount(registry.department_headcount())
        .with_total_salary(registry.total_salary());

    if registry.is_empty() {
        result.add_message(CmdMessage::info(EMPTY_REGISTRY_MESSAGE));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} employee(s) registered",
            registry.len()
        )));
    }
    Ok(result)
}
