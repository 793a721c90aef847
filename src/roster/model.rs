use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type EmployeeId = i32;

/// The fixed set of departments an employee can belong to.
///
/// Declaration order is the display order: `IT` is index 0, `Management` is 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    IT,
    HR,
    Finance,
    Marketing,
    Sales,
    Operations,
    Management,
}

impl Department {
    pub const ALL: [Department; 7] = [
        Department::IT,
        Department::HR,
        Department::Finance,
        Department::Marketing,
        Department::Sales,
        Department::Operations,
        Department::Management,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Department::IT => "IT",
            Department::HR => "HR",
            Department::Finance => "Finance",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Operations => "Operations",
            Department::Management => "Management",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the display index (`"2"`) or the name (`"finance"`).
impl FromStr for Department {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            return Self::from_index(n).ok_or_else(|| RosterError::InvalidDepartment(s.into()));
        }
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RosterError::InvalidDepartment(s.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
    pub department: Department,
}

impl Employee {
    pub fn new(
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        salary: f64,
        department: Department,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary,
            department,
        }
    }

    // The id is fixed at creation, so it is only readable.
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_declaration_order() {
        for (i, d) in Department::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
            assert_eq!(Department::from_index(i), Some(*d));
        }
        assert_eq!(Department::from_index(7), None);
    }

    #[test]
    fn parses_index_and_name() {
        assert_eq!("0".parse::<Department>().unwrap(), Department::IT);
        assert_eq!(" 6 ".parse::<Department>().unwrap(), Department::Management);
        assert_eq!("finance".parse::<Department>().unwrap(), Department::Finance);
        assert_eq!("HR".parse::<Department>().unwrap(), Department::HR);
    }

    #[test]
    fn rejects_out_of_range_department() {
        assert!(matches!(
            "7".parse::<Department>(),
            Err(RosterError::InvalidDepartment(_))
        ));
        assert!(matches!(
            "-1".parse::<Department>(),
            Err(RosterError::InvalidDepartment(_))
        ));
        assert!(matches!(
            "Legal".parse::<Department>(),
            Err(RosterError::InvalidDepartment(_))
        ));
    }

    #[test]
    fn full_name_joins_parts() {
        let emp = Employee::new(1, "Ann", "Lee", 50000.0, Department::IT);
        assert_eq!(emp.full_name(), "Ann Lee");
        assert_eq!(emp.id(), 1);
    }
}
