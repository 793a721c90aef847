use crate::commands::CmdResult;
use crate::error::{RosterError, Result};
use crate::model::EmployeeId;
use crate::registry::Registry;

pub fn run(registry: &Registry, id: EmployeeId) -> Result<CmdResult> {
    let employee = registry.get(id).cloned().ok_or(RosterError::NotFound(id))?;
    Ok(CmdResult::default().with_listed_employees(vec![employee]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::fixtures::RegistryFixture;

    #[test]
    fn finds_by_id() {
        let registry = RegistryFixture::new().with_ann_and_bo().registry;
        let result = run(&registry, 1).unwrap();
        assert_eq!(result.listed_employees[0].full_name(), "Ann Lee");
    }

    #[test]
    fn missing_id() {
        let registry = RegistryFixture::new().with_ann_and_bo().registry;
        assert!(matches!(run(&registry, 5), Err(RosterError::NotFound(5))));
    }
}
