use crate::commands::{CmdMessage, CmdResult, EMPTY_REGISTRY_MESSAGE};
use crate::error::Result;
use crate::registry::Registry;

pub fn run(registry: &Registry) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_employees(registry.list());
    if result.listed_employees.is_empty() {
        result.add_message(CmdMessage::info(EMPTY_REGISTRY_MESSAGE));
    }
    Ok(result)
}
