//! Employee model and related types.
//!
//! This module defines the Employee struct and EmployeeStatus enum
//! for representing the workers a payroll is calculated for.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the employment status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed and on payroll.
    #[default]
    Active,
    /// Employed but not currently working.
    Inactive,
    /// On approved leave.
    OnLeave,
    /// No longer employed.
    Terminated,
}

impl EmployeeStatus {
    /// Returns the status as it appears in serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
            EmployeeStatus::OnLeave => "on_leave",
            EmployeeStatus::Terminated => "terminated",
        }
    }
}

/// Represents an employee on the payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Given name(s).
    pub first_name: String,
    /// Family name(s).
    pub last_name: String,
    /// Job title.
    #[serde(default)]
    pub position: String,
    /// Department the employee belongs to.
    #[serde(default)]
    pub department: String,
    /// Monthly base salary.
    pub salary: Decimal,
    /// Employment status.
    #[serde(default)]
    pub status: EmployeeStatus,
}

impl Employee {
    /// Returns the employee's first and last name joined by a space.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, EmployeeStatus};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     first_name: "Ana".to_string(),
    ///     last_name: "Martinez".to_string(),
    ///     position: "Contadora".to_string(),
    ///     department: "Finanzas".to_string(),
    ///     salary: Decimal::new(250000, 2),
    ///     status: EmployeeStatus::Active,
    /// };
    /// assert_eq!(employee.full_name(), "Ana Martinez");
    /// assert!(employee.is_active());
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns true if the employee is currently active.
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee(status: EmployeeStatus) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Martinez".to_string(),
            position: "Contadora".to_string(),
            department: "Finanzas".to_string(),
            salary: Decimal::new(250000, 2),
            status,
        }
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "emp_001",
            "first_name": "Ana",
            "last_name": "Martinez",
            "position": "Contadora",
            "department": "Finanzas",
            "salary": "2500.00",
            "status": "on_leave"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.salary, Decimal::new(250000, 2));
        assert_eq!(employee.status, EmployeeStatus::OnLeave);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "id": "emp_002",
            "first_name": "Luis",
            "last_name": "Hernandez",
            "salary": "800"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.status, EmployeeStatus::Active);
        assert!(employee.position.is_empty());
        assert!(employee.department.is_empty());
    }

    #[test]
    fn test_full_name() {
        let employee = create_test_employee(EmployeeStatus::Active);
        assert_eq!(employee.full_name(), "Ana Martinez");
    }

    #[test]
    fn test_is_active_only_for_active_status() {
        assert!(create_test_employee(EmployeeStatus::Active).is_active());
        assert!(!create_test_employee(EmployeeStatus::Inactive).is_active());
        assert!(!create_test_employee(EmployeeStatus::OnLeave).is_active());
        assert!(!create_test_employee(EmployeeStatus::Terminated).is_active());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::OnLeave).unwrap(),
            "\"on_leave\""
        );
        assert_eq!(EmployeeStatus::Terminated.as_str(), "terminated");
    }
}
