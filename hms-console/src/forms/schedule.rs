//! Scheduling forms: doctor sessions, shift assignments, work shifts, availability

use chrono::{NaiveDate, NaiveTime};
use shared::models::{
    AvailabilityCreate, DayOfWeek, DoctorScheduleCreate, EmployeeScheduleCreate, ShiftType,
    WorkShiftCreate,
};
use validator::Validate;

use super::{EditForm, Form, FormErrors, check_order, not_blank, optional_text, required};

#[derive(Debug, Clone, Default, Validate)]
pub struct DoctorScheduleForm {
    #[validate(required)]
    pub doctor_employee_id: Option<i64>,
    #[validate(required)]
    pub clinic_id: Option<i64>,
    #[validate(required)]
    pub schedule_date: Option<NaiveDate>,
    #[validate(required)]
    pub start_time: Option<NaiveTime>,
    #[validate(required)]
    pub end_time: Option<NaiveTime>,
    pub break_start: Option<NaiveTime>,
    pub break_end: Option<NaiveTime>,
    #[validate(range(min = 5, max = 240, message = "Thời lượng mỗi lượt khám từ 5 đến 240 phút"))]
    pub slot_duration_minutes: u32,
    #[validate(range(min = 1))]
    pub max_patients: Option<u32>,
}

impl Form for DoctorScheduleForm {
    type Create = DoctorScheduleCreate;

    fn check_fields(&self, errors: &mut FormErrors) {
        check_order(self.start_time.as_ref(), self.end_time.as_ref(), "end_time", errors);
        check_order(self.break_start.as_ref(), self.break_end.as_ref(), "break_end", errors);

        match (self.break_start, self.break_end) {
            (Some(_), None) => errors.add("break_end", "Thiếu giờ kết thúc nghỉ"),
            (None, Some(_)) => errors.add("break_start", "Thiếu giờ bắt đầu nghỉ"),
            (Some(bs), Some(be)) => {
                if let (Some(start), Some(end)) = (self.start_time, self.end_time)
                    && (bs < start || be > end)
                {
                    errors.add("break_start", "Giờ nghỉ phải nằm trong ca khám");
                }
            }
            (None, None) => {}
        }
    }

    fn to_create(&self) -> Result<DoctorScheduleCreate, FormErrors> {
        self.check()?;
        Ok(DoctorScheduleCreate {
            doctor_employee_id: required(&self.doctor_employee_id, "doctor_employee_id")?,
            clinic_id: required(&self.clinic_id, "clinic_id")?,
            schedule_date: required(&self.schedule_date, "schedule_date")?,
            start_time: required(&self.start_time, "start_time")?,
            end_time: required(&self.end_time, "end_time")?,
            break_start: self.break_start,
            break_end: self.break_end,
            slot_duration_minutes: self.slot_duration_minutes,
            max_patients: self.max_patients,
        })
    }
}

impl EditForm for DoctorScheduleForm {
    type Update = DoctorScheduleCreate;

    fn to_update(&self) -> Result<DoctorScheduleCreate, FormErrors> {
        self.to_create()
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct EmployeeScheduleForm {
    #[validate(required)]
    pub employee_id: Option<i64>,
    #[validate(required)]
    pub work_shift_id: Option<i64>,
    #[validate(required)]
    pub work_date: Option<NaiveDate>,
    #[validate(length(max = 500))]
    pub note: Option<String>,
}

impl Form for EmployeeScheduleForm {
    type Create = EmployeeScheduleCreate;

    fn to_create(&self) -> Result<EmployeeScheduleCreate, FormErrors> {
        self.check()?;
        Ok(EmployeeScheduleCreate {
            employee_id: required(&self.employee_id, "employee_id")?,
            work_shift_id: required(&self.work_shift_id, "work_shift_id")?,
            work_date: required(&self.work_date, "work_date")?,
            note: optional_text(&self.note),
        })
    }
}

impl EditForm for EmployeeScheduleForm {
    type Update = EmployeeScheduleCreate;

    fn to_update(&self) -> Result<EmployeeScheduleCreate, FormErrors> {
        self.to_create()
    }
}

/// Work shift definition; night shifts may end on the next day
#[derive(Debug, Clone, Default, Validate)]
pub struct WorkShiftForm {
    #[validate(custom(function = "not_blank"), length(max = 100))]
    pub shift_name: String,
    #[validate(required)]
    pub start_time: Option<NaiveTime>,
    #[validate(required)]
    pub end_time: Option<NaiveTime>,
    pub shift_type: ShiftType,
    pub is_active: Option<bool>,
}

impl Form for WorkShiftForm {
    type Create = WorkShiftCreate;

    fn check_fields(&self, errors: &mut FormErrors) {
        if let (Some(start), Some(end)) = (self.start_time, self.end_time)
            && start == end
        {
            errors.add("end_time", "Giờ kết thúc phải khác giờ bắt đầu");
        }
    }

    fn to_create(&self) -> Result<WorkShiftCreate, FormErrors> {
        self.check()?;
        Ok(WorkShiftCreate {
            shift_name: self.shift_name.trim().to_string(),
            start_time: required(&self.start_time, "start_time")?,
            end_time: required(&self.end_time, "end_time")?,
            shift_type: self.shift_type,
            is_active: self.is_active,
        })
    }
}

impl EditForm for WorkShiftForm {
    type Update = WorkShiftCreate;

    fn to_update(&self) -> Result<WorkShiftCreate, FormErrors> {
        self.to_create()
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct AvailabilityForm {
    #[validate(required)]
    pub employee_id: Option<i64>,
    #[validate(required)]
    pub day_of_week: Option<DayOfWeek>,
    #[validate(required)]
    pub start_time: Option<NaiveTime>,
    #[validate(required)]
    pub end_time: Option<NaiveTime>,
    pub is_available: bool,
    pub effective_from: Option<NaiveDate>,
    pub effective_to: Option<NaiveDate>,
}

impl Form for AvailabilityForm {
    type Create = AvailabilityCreate;

    fn check_fields(&self, errors: &mut FormErrors) {
        check_order(self.start_time.as_ref(), self.end_time.as_ref(), "end_time", errors);
        check_order(
            self.effective_from.as_ref(),
            self.effective_to.as_ref(),
            "effective_to",
            errors,
        );
    }

    fn to_create(&self) -> Result<AvailabilityCreate, FormErrors> {
        self.check()?;
        Ok(AvailabilityCreate {
            employee_id: required(&self.employee_id, "employee_id")?,
            day_of_week: required(&self.day_of_week, "day_of_week")?,
            start_time: required(&self.start_time, "start_time")?,
            end_time: required(&self.end_time, "end_time")?,
            is_available: self.is_available,
            effective_from: self.effective_from,
            effective_to: self.effective_to,
        })
    }
}

impl EditForm for AvailabilityForm {
    type Update = AvailabilityCreate;

    fn to_update(&self) -> Result<AvailabilityCreate, FormErrors> {
        self.to_create()
    }
}
