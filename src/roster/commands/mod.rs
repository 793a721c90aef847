use crate::model::{Department, Employee};

pub mod add;
pub mod assign;
pub mod departments;
pub mod get;
pub mod list;
pub mod remove;
pub mod salary;
pub mod summary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_employees: Vec<Employee>,
    pub listed_employees: Vec<Employee>,
    pub departments: Vec<(usize, Department)>,
    pub headcount: Vec<(Department, usize)>,
    pub total_salary: Option<f64>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_employees(mut self, employees: Vec<Employee>) -> Self {
        self.affected_employees = employees;
        self
    }

    pub fn with_listed_employees(mut self, employees: Vec<Employee>) -> Self {
        self.listed_employees = employees;
        self
    }

    pub fn with_departments(mut self, departments: Vec<(usize, Department)>) -> Self {
        self.departments = departments;
        self
    }

    pub fn with_headcount(mut self, headcount: Vec<(Department, usize)>) -> Self {
        self.headcount = headcount;
        self
    }

    pub fn with_total_salary(mut self, total: f64) -> Self {
        self.total_salary = Some(total);
        self
    }
}

/// Message shown wherever an operation needs at least one employee.
pub const EMPTY_REGISTRY_MESSAGE: &str = "There are currently no employees registered.";
