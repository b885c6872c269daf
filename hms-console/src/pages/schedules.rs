//! Doctor schedule and employee shift-assignment pages

use chrono::NaiveDate;
use hms_client::{ApiClient, DoctorScheduleApi, EmployeeScheduleApi};
use shared::models::{DoctorSchedule, EmployeeSchedule, ScheduleStatus};

use crate::crud::{CrudList, ListFilter};
use crate::error::{PageError, PageResult};
use crate::forms::{DoctorScheduleForm, EmployeeScheduleForm, FormErrors, MSG_END_BEFORE_START};

fn check_range(start: NaiveDate, end: NaiveDate) -> PageResult<()> {
    if end < start {
        return Err(PageError::Validation(FormErrors::single(
            "end_date",
            MSG_END_BEFORE_START,
        )));
    }
    Ok(())
}

// ========== Doctor schedules ==========

#[derive(Debug, Clone, Default)]
pub struct DoctorScheduleFilter {
    pub doctor_employee_id: Option<i64>,
    pub clinic_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub status: Option<ScheduleStatus>,
}

impl ListFilter<DoctorSchedule> for DoctorScheduleFilter {
    fn matches(&self, s: &DoctorSchedule) -> bool {
        self.doctor_employee_id
            .is_none_or(|d| d == s.doctor_employee_id)
            && self.clinic_id.is_none_or(|c| c == s.clinic_id)
            && self.date.is_none_or(|d| d == s.schedule_date)
            && self.status.is_none_or(|st| st == s.status)
    }
}

pub struct DoctorSchedulePage {
    list: CrudList<DoctorScheduleApi, DoctorScheduleFilter>,
}

impl DoctorSchedulePage {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            list: CrudList::new(client.doctor_schedules()),
        }
    }

    pub fn list(&self) -> &CrudList<DoctorScheduleApi, DoctorScheduleFilter> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut CrudList<DoctorScheduleApi, DoctorScheduleFilter> {
        &mut self.list
    }

    pub async fn load(&mut self) -> PageResult<usize> {
        self.list.load().await
    }

    pub async fn load_for_doctor(&mut self, doctor_employee_id: i64) -> PageResult<usize> {
        let found = self.list.resource().by_doctor(doctor_employee_id).await?;
        let count = found.len();
        self.list.replace_items(found);
        Ok(count)
    }

    pub async fn load_range(&mut self, start: NaiveDate, end: NaiveDate) -> PageResult<usize> {
        check_range(start, end)?;
        let found = self.list.resource().by_date_range(start, end).await?;
        let count = found.len();
        self.list.replace_items(found);
        Ok(count)
    }

    pub async fn create(&mut self, form: &DoctorScheduleForm) -> PageResult<DoctorSchedule> {
        self.list.create(form).await
    }

    pub async fn update(
        &mut self,
        id: i64,
        form: &DoctorScheduleForm,
    ) -> PageResult<DoctorSchedule> {
        self.list.update(id, form).await
    }

    pub async fn delete(&mut self, id: i64) -> PageResult<()> {
        self.list.delete(id).await
    }
}

// ========== Employee schedules ==========

#[derive(Debug, Clone, Default)]
pub struct EmployeeScheduleFilter {
    pub employee_id: Option<i64>,
    pub work_shift_id: Option<i64>,
    pub date: Option<NaiveDate>,
}

impl ListFilter<EmployeeSchedule> for EmployeeScheduleFilter {
    fn matches(&self, s: &EmployeeSchedule) -> bool {
        self.employee_id.is_none_or(|e| e == s.employee_id)
            && self.work_shift_id.is_none_or(|w| w == s.work_shift_id)
            && self.date.is_none_or(|d| d == s.work_date)
    }
}

pub struct EmployeeSchedulePage {
    list: CrudList<EmployeeScheduleApi, EmployeeScheduleFilter>,
}

impl EmployeeSchedulePage {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            list: CrudList::new(client.employee_schedules()),
        }
    }

    pub fn list(&self) -> &CrudList<EmployeeScheduleApi, EmployeeScheduleFilter> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut CrudList<EmployeeScheduleApi, EmployeeScheduleFilter> {
        &mut self.list
    }

    pub async fn load(&mut self) -> PageResult<usize> {
        self.list.load().await
    }

    pub async fn load_for_employee(&mut self, employee_id: i64) -> PageResult<usize> {
        let found = self.list.resource().by_employee(employee_id).await?;
        let count = found.len();
        self.list.replace_items(found);
        Ok(count)
    }

    pub async fn load_range(&mut self, start: NaiveDate, end: NaiveDate) -> PageResult<usize> {
        check_range(start, end)?;
        let found = self.list.resource().by_date_range(start, end).await?;
        let count = found.len();
        self.list.replace_items(found);
        Ok(count)
    }

    pub async fn create(&mut self, form: &EmployeeScheduleForm) -> PageResult<EmployeeSchedule> {
        self.list.create(form).await
    }

    pub async fn update(
        &mut self,
        id: i64,
        form: &EmployeeScheduleForm,
    ) -> PageResult<EmployeeSchedule> {
        self.list.update(id, form).await
    }

    pub async fn delete(&mut self, id: i64) -> PageResult<()> {
        self.list.delete(id).await
    }
}
