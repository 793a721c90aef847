use crate::model::EmployeeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Employee ID already exists: {0}")]
    DuplicateId(EmployeeId),

    #[error("Employee not found: {0}")]
    NotFound(EmployeeId),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid department: {0}")]
    InvalidDepartment(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
