//! Time-off Request API
//!
//! CRUD plus the review workflow (approve / reject / withdraw), the
//! current/upcoming counters shown on the HR dashboard, and per-type leave
//! balances.

use chrono::NaiveDate;
use reqwest::Method;
use shared::CountResponse;
use shared::models::{
    ApproveRequest, LeaveBalance, LeaveType, RejectRequest, TimeOffCreate, TimeOffRequest,
    TimeOffStatus, TimeOffUpdate,
};

use crate::{ApiClient, ClientResult};

const BASE: &str = "api/v1/time-off-requests";

#[derive(Debug, Clone)]
pub struct TimeOffApi {
    client: ApiClient,
}

crud_resource!(TimeOffApi, "time_off", BASE, TimeOffRequest, TimeOffCreate, TimeOffUpdate);

impl TimeOffApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn by_employee(&self, employee_id: i64) -> ClientResult<Vec<TimeOffRequest>> {
        self.client
            .get_list(&format!("{BASE}/employee/{employee_id}"), &[])
            .await
    }

    pub async fn by_status(&self, status: TimeOffStatus) -> ClientResult<Vec<TimeOffRequest>> {
        self.client
            .get_list(&format!("{BASE}/status/{}", status.as_str()), &[])
            .await
    }

    /// Requests overlapping `[start, end]`
    pub async fn by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ClientResult<Vec<TimeOffRequest>> {
        self.client
            .get_list(
                &format!("{BASE}/search"),
                &[("startDate", start.to_string()), ("endDate", end.to_string())],
            )
            .await
    }

    // ========== Review workflow ==========

    pub async fn approve(&self, id: i64, note: &str) -> ClientResult<()> {
        let body = ApproveRequest {
            note: note.to_string(),
        };
        self.client
            .call_discard(Method::POST, &format!("{BASE}/{id}/approve"), Some(&body))
            .await
    }

    pub async fn reject(&self, id: i64, reason: &str) -> ClientResult<()> {
        let body = RejectRequest {
            reason: reason.to_string(),
        };
        self.client
            .call_discard(Method::POST, &format!("{BASE}/{id}/reject"), Some(&body))
            .await
    }

    pub async fn withdraw(&self, id: i64) -> ClientResult<()> {
        self.client
            .call_discard::<()>(Method::POST, &format!("{BASE}/{id}/withdraw"), None)
            .await
    }

    // ========== Counters ==========

    /// Employees on leave today
    pub async fn current_count(&self) -> ClientResult<u64> {
        let resp: CountResponse = self.client.get(&format!("{BASE}/current/count")).await?;
        Ok(resp.count)
    }

    /// Approved leave starting in the future
    pub async fn upcoming_count(&self) -> ClientResult<u64> {
        let resp: CountResponse = self.client.get(&format!("{BASE}/upcoming/count")).await?;
        Ok(resp.count)
    }

    /// Balance of one leave type for one employee in one year
    pub async fn balance(
        &self,
        employee_id: i64,
        year: i32,
        leave_type: LeaveType,
    ) -> ClientResult<LeaveBalance> {
        self.client
            .get_query(
                &format!("{BASE}/balance"),
                &[
                    ("employeeId", employee_id.to_string()),
                    ("year", year.to_string()),
                    ("leaveType", leave_type.as_str().to_string()),
                ],
            )
            .await
    }
}
