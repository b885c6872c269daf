//! Time-off review page
//!
//! Holds every request the backend returned (`all_requests`). With the date
//! range switched on and both ends set, the display shows the server's
//! date-range search instead, once that search has run for exactly that
//! range; until then `all_requests` stays on screen. Switching the range off
//! shows `all_requests` again without a request. A status filter applies on
//! top of either.
//!
//! Each action is one REST call, followed by a re-fetch of the list and of
//! the two dashboard counters.

use chrono::NaiveDate;
use hms_client::{ApiClient, CrudResource, TimeOffApi};
use shared::models::{TimeOffAction, TimeOffRequest, TimeOffStatus, UserRole};

use crate::error::{PageError, PageResult};
use crate::forms::{Form, FormErrors, MSG_END_BEFORE_START, TimeOffForm};

pub struct TimeOffPage {
    api: TimeOffApi,
    role: UserRole,
    all_requests: Vec<TimeOffRequest>,
    range_requests: Vec<TimeOffRequest>,
    /// Range `range_requests` was fetched for
    range_for: Option<(NaiveDate, NaiveDate)>,
    use_date_range: bool,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    status_filter: Option<TimeOffStatus>,
    current_count: u64,
    upcoming_count: u64,
}

impl TimeOffPage {
    pub fn new(client: &ApiClient, role: UserRole) -> Self {
        Self {
            api: client.time_off(),
            role,
            all_requests: Vec::new(),
            range_requests: Vec::new(),
            range_for: None,
            use_date_range: false,
            start_date: None,
            end_date: None,
            status_filter: None,
            current_count: 0,
            upcoming_count: 0,
        }
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn all_requests(&self) -> &[TimeOffRequest] {
        &self.all_requests
    }

    pub fn current_count(&self) -> u64 {
        self.current_count
    }

    pub fn upcoming_count(&self) -> u64 {
        self.upcoming_count
    }

    // ========== Filters ==========

    pub fn use_date_range(&self) -> bool {
        self.use_date_range
    }

    pub fn set_use_date_range(&mut self, on: bool) {
        self.use_date_range = on;
    }

    pub fn set_date_range(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> PageResult<()> {
        if let (Some(s), Some(e)) = (start, end)
            && e < s
        {
            return Err(PageError::Validation(FormErrors::single(
                "end_date",
                MSG_END_BEFORE_START,
            )));
        }
        self.start_date = start;
        self.end_date = end;
        Ok(())
    }

    pub fn set_status_filter(&mut self, status: Option<TimeOffStatus>) {
        self.status_filter = status;
    }

    /// The date range in force, if the toggle is on and both ends are set
    fn active_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.use_date_range, self.start_date, self.end_date) {
            (true, Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Whether the range search results match the range in force
    pub fn showing_range(&self) -> bool {
        self.active_range().is_some() && self.range_for == self.active_range()
    }

    /// What the table shows
    pub fn displayed(&self) -> Vec<&TimeOffRequest> {
        let source = if self.showing_range() {
            &self.range_requests
        } else {
            &self.all_requests
        };
        source
            .iter()
            .filter(|r| self.status_filter.is_none_or(|s| s == r.status))
            .collect()
    }

    pub fn actions_for(&self, request: &TimeOffRequest) -> &'static [TimeOffAction] {
        request.actions_for(self.role)
    }

    // ========== Loading ==========

    /// Fetch the list, the range search when active, and both counters
    pub async fn refresh(&mut self) -> PageResult<()> {
        let (all, current, upcoming) = futures::try_join!(
            self.api.list(),
            self.api.current_count(),
            self.api.upcoming_count(),
        )?;
        self.all_requests = all;
        self.current_count = current;
        self.upcoming_count = upcoming;

        if self.active_range().is_some() {
            self.apply_date_range().await?;
        } else {
            self.range_requests.clear();
            self.range_for = None;
        }

        tracing::debug!(
            total = self.all_requests.len(),
            current = self.current_count,
            upcoming = self.upcoming_count,
            "Time-off requests refreshed"
        );
        Ok(())
    }

    /// Run the date-range search now
    pub async fn apply_date_range(&mut self) -> PageResult<usize> {
        let (start, end) = self
            .active_range()
            .ok_or(PageError::MissingInput("start_date/end_date"))?;
        self.range_requests = self.api.by_date_range(start, end).await?;
        self.range_for = Some((start, end));
        Ok(self.range_requests.len())
    }

    // ========== Actions ==========

    pub async fn submit(&mut self, form: &TimeOffForm) -> PageResult<TimeOffRequest> {
        let payload = form.to_create()?;
        let created = self.api.create(&payload).await?;
        tracing::info!(request_id = created.request_id, "Time-off request submitted");
        self.refresh().await?;
        Ok(created)
    }

    pub async fn approve(&mut self, id: i64, note: &str) -> PageResult<()> {
        let note = note.trim();
        if note.is_empty() {
            return Err(PageError::MissingInput("note"));
        }
        self.api.approve(id, note).await?;
        tracing::info!(request_id = id, "Time-off request approved");
        self.refresh().await
    }

    pub async fn reject(&mut self, id: i64, reason: &str) -> PageResult<()> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(PageError::MissingInput("reason"));
        }
        self.api.reject(id, reason).await?;
        tracing::info!(request_id = id, "Time-off request rejected");
        self.refresh().await
    }

    pub async fn withdraw(&mut self, id: i64) -> PageResult<()> {
        self.api.withdraw(id).await?;
        tracing::info!(request_id = id, "Time-off request withdrawn");
        self.refresh().await
    }

    pub async fn delete(&mut self, id: i64) -> PageResult<()> {
        self.api.delete(id).await?;
        tracing::info!(request_id = id, "Time-off request deleted");
        self.refresh().await
    }
}
