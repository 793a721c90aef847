use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EmployeeId;
use crate::registry::Registry;

pub fn run(registry: &mut Registry, id: EmployeeId) -> Result<CmdResult> {
    let removed = registry.remove(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee removed successfully: {} {}",
        removed.id(),
        removed.full_name()
    )));
    Ok(result.with_affected_employees(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::registry::fixtures::RegistryFixture;

    #[test]
    fn removes_present_employee() {
        let mut registry = RegistryFixture::new().with_ann_and_bo().registry;

        let result = run(&mut registry, 2).unwrap();

        assert_eq!(result.affected_employees.len(), 1);
        assert_eq!(result.affected_employees[0].full_name(), "Bo Tan");
        assert!(!registry.contains(2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut registry = RegistryFixture::new().with_ann_and_bo().registry;

        assert!(matches!(run(&mut registry, 3), Err(RosterError::NotFound(3))));
        assert_eq!(registry.len(), 2);
    }
}
