//! Employee Availability Model (weekly recurring availability)

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Day of week as the backend spells it (MONDAY..SUNDAY)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub availability_id: i64,
    pub employee_id: i64,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub day_of_week: DayOfWeek,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
    #[serde(default)]
    pub effective_from: Option<NaiveDate>,
    #[serde(default)]
    pub effective_to: Option<NaiveDate>,
}

impl Availability {
    /// Whether this entry applies on `date` (weekday and effective window)
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        DayOfWeek::from(chrono::Datelike::weekday(&date)) == self.day_of_week
            && self.effective_from.is_none_or(|from| date >= from)
            && self.effective_to.is_none_or(|to| date <= to)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityCreate {
    pub employee_id: i64,
    pub day_of_week: DayOfWeek,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_to: Option<NaiveDate>,
}

pub type AvailabilityUpdate = AvailabilityCreate;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applies_on() {
        let entry = Availability {
            availability_id: 1,
            employee_id: 4,
            employee_name: None,
            day_of_week: DayOfWeek::Monday,
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            is_available: true,
            effective_from: NaiveDate::from_ymd_opt(2026, 1, 1),
            effective_to: None,
        };
        // 2026-03-02 is a Monday
        assert!(entry.applies_on(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()));
        assert!(!entry.applies_on(NaiveDate::from_ymd_opt(2026, 3, 3).unwrap()));
        // Monday before the effective window
        assert!(!entry.applies_on(NaiveDate::from_ymd_opt(2025, 12, 29).unwrap()));
    }
}
