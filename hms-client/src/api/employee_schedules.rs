//! Employee Schedule API

use chrono::NaiveDate;
use shared::models::{EmployeeSchedule, EmployeeScheduleCreate, EmployeeScheduleUpdate};

use crate::{ApiClient, ClientResult};

const BASE: &str = "api/v1/employee-schedules";

#[derive(Debug, Clone)]
pub struct EmployeeScheduleApi {
    client: ApiClient,
}

crud_resource!(
    EmployeeScheduleApi,
    "employee_schedule",
    BASE,
    EmployeeSchedule,
    EmployeeScheduleCreate,
    EmployeeScheduleUpdate
);

impl EmployeeScheduleApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn by_employee(&self, employee_id: i64) -> ClientResult<Vec<EmployeeSchedule>> {
        self.client
            .get_list(&format!("{BASE}/employee/{employee_id}"), &[])
            .await
    }

    pub async fn by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ClientResult<Vec<EmployeeSchedule>> {
        self.client
            .get_list(
                &format!("{BASE}/search"),
                &[("startDate", start.to_string()), ("endDate", end.to_string())],
            )
            .await
    }
}
