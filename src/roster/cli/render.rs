//! # Rendering
//!
//! Everything here returns `String`s; the caller decides where they go. Column
//! widths are measured with `unicode-width` so names outside ASCII still line up.

use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::config::RosterConfig;
use roster::model::{Department, Employee};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ROW_WIDTH: usize = 7;
const ID_WIDTH: usize = 10;
const NAME_WIDTH: usize = 20;
const SALARY_WIDTH: usize = 15;
const DEPARTMENT_WIDTH: usize = 12;
const RULE_WIDTH: usize = ROW_WIDTH + ID_WIDTH + NAME_WIDTH + SALARY_WIDTH + DEPARTMENT_WIDTH + 4;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

/// Numbered table of employees: row, ID, name, salary, department.
pub fn render_employee_table(employees: &[Employee], config: &RosterConfig) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let header = format!(
        "{} {} {} {} {}",
        pad("", ROW_WIDTH),
        pad("ID", ID_WIDTH),
        pad("Name", NAME_WIDTH),
        pad("Salary", SALARY_WIDTH),
        "Department"
    );

    let mut out = String::new();
    out.push_str(&format!("{}\n{}\n{}\n", rule, header.bold(), rule));
    for (i, emp) in employees.iter().enumerate() {
        let name = truncate_to_width(&emp.full_name(), NAME_WIDTH);
        out.push_str(&format!(
            "{} {} {} {} {}\n",
            pad(&format!(" {}.)", i + 1), ROW_WIDTH),
            pad(&emp.id().to_string(), ID_WIDTH),
            pad(&name, NAME_WIDTH),
            pad(&config.format_salary(emp.salary), SALARY_WIDTH),
            emp.department
        ));
    }
    out
}

/// The `[index] Name` list shown when picking a department.
pub fn render_departments(departments: &[(usize, Department)]) -> String {
    departments
        .iter()
        .map(|(i, d)| format!("[{}] {}\n", i, d))
        .collect()
}

pub fn render_total_salary(total: f64, config: &RosterConfig) -> String {
    format!(
        "Total salary of all employees: {}\n",
        config.format_salary(total).bold()
    )
}

pub fn render_headcount(headcount: &[(Department, usize)]) -> String {
    let mut out = String::new();
    for (dept, count) in headcount {
        let line = format!("{} {}", pad(dept.name(), DEPARTMENT_WIDTH), count);
        if *count == 0 {
            out.push_str(&format!("{}\n", line.dimmed()));
        } else {
            out.push_str(&format!("{}\n", line));
        }
    }
    out
}

fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
