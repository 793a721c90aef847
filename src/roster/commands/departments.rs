use crate::commands::CmdResult;
use crate::error::Result;
use crate::registry::Registry;

pub fn run() -> Result<CmdResult> {
    Ok(CmdResult::default().with_departments(Registry::department_catalog().to_vec()))
}
