//! Leave request form

use chrono::NaiveDate;
use shared::models::{LeaveType, TimeOffCreate, TimeOffUpdate};
use validator::Validate;

use super::{EditForm, Form, FormErrors, check_order, optional_text, required};

#[derive(Debug, Clone, Default, Validate)]
pub struct TimeOffForm {
    #[validate(required)]
    pub employee_id: Option<i64>,
    #[validate(required)]
    pub leave_type: Option<LeaveType>,
    #[validate(required)]
    pub start_date: Option<NaiveDate>,
    #[validate(required)]
    pub end_date: Option<NaiveDate>,
    #[validate(length(max = 500))]
    pub reason: Option<String>,
}

impl Form for TimeOffForm {
    type Create = TimeOffCreate;

    fn check_fields(&self, errors: &mut FormErrors) {
        check_order(self.start_date.as_ref(), self.end_date.as_ref(), "end_date", errors);
    }

    fn to_create(&self) -> Result<TimeOffCreate, FormErrors> {
        self.check()?;
        Ok(TimeOffCreate {
            employee_id: required(&self.employee_id, "employee_id")?,
            leave_type: required(&self.leave_type, "leave_type")?,
            start_date: required(&self.start_date, "start_date")?,
            end_date: required(&self.end_date, "end_date")?,
            reason: optional_text(&self.reason),
        })
    }
}

impl EditForm for TimeOffForm {
    type Update = TimeOffUpdate;

    fn to_update(&self) -> Result<TimeOffUpdate, FormErrors> {
        self.check()?;
        Ok(TimeOffUpdate {
            leave_type: self.leave_type,
            start_date: self.start_date,
            end_date: self.end_date,
            reason: optional_text(&self.reason),
        })
    }
}
