//! Doctor Schedule Model (clinic sessions)

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

/// A doctor's clinic session on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorSchedule {
    pub doctor_schedule_id: i64,
    pub doctor_employee_id: i64,
    #[serde(default)]
    pub doctor_name: Option<String>,
    pub clinic_id: i64,
    #[serde(default)]
    pub clinic_name: Option<String>,
    pub schedule_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub break_start: Option<NaiveTime>,
    #[serde(default)]
    pub break_end: Option<NaiveTime>,
    pub slot_duration_minutes: u32,
    #[serde(default)]
    pub max_patients: Option<u32>,
    #[serde(default)]
    pub status: ScheduleStatus,
}

impl DoctorSchedule {
    /// Number of appointment slots in the session, break excluded
    pub fn slot_count(&self) -> u32 {
        if self.slot_duration_minutes == 0 {
            return 0;
        }
        let mut minutes = (self.end_time - self.start_time).num_minutes().max(0);
        if let (Some(bs), Some(be)) = (self.break_start, self.break_end) {
            minutes -= (be - bs).num_minutes().max(0);
        }
        (minutes.max(0) as u32) / self.slot_duration_minutes
    }
}

/// Create/update doctor schedule payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorScheduleCreate {
    pub doctor_employee_id: i64,
    pub clinic_id: i64,
    pub schedule_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_start: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_end: Option<NaiveTime>,
    pub slot_duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_patients: Option<u32>,
}

pub type DoctorScheduleUpdate = DoctorScheduleCreate;
