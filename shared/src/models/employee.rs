//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Employee role type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleType {
    Doctor,
    Nurse,
    Pharmacist,
    Technician,
    Receptionist,
    Accountant,
    Hr,
    Admin,
}

impl RoleType {
    pub const ALL: [RoleType; 8] = [
        RoleType::Doctor,
        RoleType::Nurse,
        RoleType::Pharmacist,
        RoleType::Technician,
        RoleType::Receptionist,
        RoleType::Accountant,
        RoleType::Hr,
        RoleType::Admin,
    ];

    /// Wire name, as used in path segments
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Doctor => "DOCTOR",
            Self::Nurse => "NURSE",
            Self::Pharmacist => "PHARMACIST",
            Self::Technician => "TECHNICIAN",
            Self::Receptionist => "RECEPTIONIST",
            Self::Accountant => "ACCOUNTANT",
            Self::Hr => "HR",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == upper)
            .ok_or_else(|| format!("unknown role type: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Personal details embedded in an employee record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub national_id: Option<String>,
}

impl Person {
    /// "Last First", the order names are shown in
    pub fn full_name(&self) -> String {
        match (self.last_name.trim(), self.first_name.trim()) {
            ("", first) => first.to_string(),
            (last, "") => last.to_string(),
            (last, first) => format!("{last} {first}"),
        }
    }
}

/// Employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub employee_code: String,
    pub person: Person,
    pub department_id: Option<i64>,
    #[serde(default)]
    pub department_name: Option<String>,
    pub role_type: RoleType,
    pub is_active: bool,
    #[serde(default)]
    pub has_account: bool,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub employee_code: String,
    pub person: Person,
    pub department_id: i64,
    pub role_type: RoleType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
}

/// Update employee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_type: Option<RoleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_deserialize() {
        let json = r#"{
            "id": 3,
            "employeeCode": "BS001",
            "person": {"firstName": "An", "lastName": "Tran", "dateOfBirth": "1985-04-02"},
            "departmentId": 2,
            "roleType": "DOCTOR",
            "isActive": true,
            "hasAccount": false
        }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.employee_code, "BS001");
        assert_eq!(employee.role_type, RoleType::Doctor);
        assert_eq!(employee.person.full_name(), "Tran An");
        assert_eq!(
            employee.person.date_of_birth,
            NaiveDate::from_ymd_opt(1985, 4, 2)
        );
    }

    #[test]
    fn test_role_type_from_str() {
        assert_eq!("nurse".parse::<RoleType>(), Ok(RoleType::Nurse));
        assert_eq!(" HR ".parse::<RoleType>(), Ok(RoleType::Hr));
        assert!("janitor".parse::<RoleType>().is_err());
    }

    #[test]
    fn test_update_skips_unset_fields() {
        let update = EmployeeUpdate {
            is_active: Some(false),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"isActive": false}));
    }
}
