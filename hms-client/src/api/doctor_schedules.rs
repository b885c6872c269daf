//! Doctor Schedule API

use chrono::NaiveDate;
use shared::models::{DoctorSchedule, DoctorScheduleCreate, DoctorScheduleUpdate};

use crate::{ApiClient, ClientResult};

const BASE: &str = "api/v1/doctor-schedules";

#[derive(Debug, Clone)]
pub struct DoctorScheduleApi {
    client: ApiClient,
}

crud_resource!(
    DoctorScheduleApi,
    "doctor_schedule",
    BASE,
    DoctorSchedule,
    DoctorScheduleCreate,
    DoctorScheduleUpdate
);

impl DoctorScheduleApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn by_doctor(&self, doctor_employee_id: i64) -> ClientResult<Vec<DoctorSchedule>> {
        self.client
            .get_list(&format!("{BASE}/doctor/{doctor_employee_id}"), &[])
            .await
    }

    /// Sessions with `schedule_date` in `[start, end]`
    pub async fn by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ClientResult<Vec<DoctorSchedule>> {
        self.client
            .get_list(
                &format!("{BASE}/search"),
                &[("startDate", start.to_string()), ("endDate", end.to_string())],
            )
            .await
    }
}
