//! Employee Schedule Model (shift assignments)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::doctor_schedule::ScheduleStatus;

/// Assignment of an employee to a work shift on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSchedule {
    pub schedule_id: i64,
    pub employee_id: i64,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub work_shift_id: i64,
    #[serde(default)]
    pub shift_name: Option<String>,
    pub work_date: NaiveDate,
    #[serde(default)]
    pub status: ScheduleStatus,
    #[serde(default)]
    pub note: Option<String>,
}

/// Create/update employee schedule payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeScheduleCreate {
    pub employee_id: i64,
    pub work_shift_id: i64,
    pub work_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

pub type EmployeeScheduleUpdate = EmployeeScheduleCreate;
