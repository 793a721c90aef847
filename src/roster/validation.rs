//! Parsing and validation of user-supplied values.
//!
//! The registry assumes well-formed records; these helpers are how a UI gets
//! raw text into that shape. Every failure is a [`RosterError::InvalidInput`]
//! or [`RosterError::InvalidDepartment`] so callers can simply re-prompt.

use crate::error::{RosterError, Result};
use crate::model::{Department, EmployeeId};

pub fn parse_employee_id(input: &str) -> Result<EmployeeId> {
    input
        .trim()
        .parse()
        .map_err(|_| RosterError::InvalidInput(format!("'{}' is not a valid employee ID", input.trim())))
}

pub fn parse_salary(input: &str) -> Result<f64> {
    let salary: f64 = input
        .trim()
        .parse()
        .map_err(|_| RosterError::InvalidInput(format!("'{}' is not a valid number", input.trim())))?;
    validate_salary(salary)
}

pub fn validate_salary(salary: f64) -> Result<f64> {
    if !salary.is_finite() || salary < 0.0 {
        return Err(RosterError::InvalidInput(format!(
            "Salary must be a non-negative number, got {}",
            salary
        )));
    }
    Ok(salary)
}

/// Trims the value and rejects it if nothing is left. `field` names it in the error.
pub fn validate_name(field: &str, input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(RosterError::InvalidInput(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

pub fn parse_department(input: &str) -> Result<Department> {
    input.parse()
}

/// Answer to a "do it again? (y/n)" prompt. Only an explicit no stops the loop.
pub fn parse_confirmation(input: &str) -> bool {
    let answer = input.trim();
    !(answer.eq_ignore_ascii_case("n") || answer.eq_ignore_ascii_case("no"))
}
