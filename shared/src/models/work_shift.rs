//! Work Shift Model (shift templates: morning, afternoon, night...)

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftType {
    #[default]
    Morning,
    Afternoon,
    Night,
    FullDay,
    OnCall,
}

/// Work shift template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkShift {
    pub work_shift_id: i64,
    pub shift_name: String,
    pub start_time: NaiveTime,
    /// May be earlier than `start_time` for shifts crossing midnight
    pub end_time: NaiveTime,
    #[serde(default)]
    pub shift_type: ShiftType,
    pub is_active: bool,
}

impl WorkShift {
    pub fn crosses_midnight(&self) -> bool {
        self.end_time <= self.start_time
    }

    /// Shift length in minutes, accounting for midnight crossing
    pub fn duration_minutes(&self) -> i64 {
        let minutes = (self.end_time - self.start_time).num_minutes();
        if self.crosses_midnight() {
            minutes + 24 * 60
        } else {
            minutes
        }
    }
}

/// Create/update work shift payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkShiftCreate {
    pub shift_name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub shift_type: ShiftType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

pub type WorkShiftUpdate = WorkShiftCreate;

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(start: &str, end: &str) -> WorkShift {
        WorkShift {
            work_shift_id: 1,
            shift_name: "Ca".into(),
            start_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            end_time: NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
            shift_type: ShiftType::Night,
            is_active: true,
        }
    }

    #[test]
    fn test_duration() {
        assert_eq!(shift("07:00", "15:00").duration_minutes(), 480);
        assert!(!shift("07:00", "15:00").crosses_midnight());
        assert_eq!(shift("22:00", "06:00").duration_minutes(), 480);
        assert!(shift("22:00", "06:00").crosses_midnight());
    }
}
