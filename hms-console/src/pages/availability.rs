//! Employee availability page

use chrono::NaiveDate;
use hms_client::{ApiClient, AvailabilityApi};
use shared::models::{Availability, DayOfWeek};

use crate::crud::{CrudList, ListFilter};
use crate::error::PageResult;
use crate::forms::AvailabilityForm;

#[derive(Debug, Clone, Default)]
pub struct AvailabilityFilter {
    pub employee_id: Option<i64>,
    pub day_of_week: Option<DayOfWeek>,
    /// Keep only windows in effect on this date
    pub on_date: Option<NaiveDate>,
}

impl ListFilter<Availability> for AvailabilityFilter {
    fn matches(&self, a: &Availability) -> bool {
        self.employee_id.is_none_or(|e| e == a.employee_id)
            && self.day_of_week.is_none_or(|d| d == a.day_of_week)
            && self.on_date.is_none_or(|d| a.applies_on(d))
    }
}

pub struct AvailabilityPage {
    list: CrudList<AvailabilityApi, AvailabilityFilter>,
}

impl AvailabilityPage {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            list: CrudList::new(client.availability()),
        }
    }

    pub fn list(&self) -> &CrudList<AvailabilityApi, AvailabilityFilter> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut CrudList<AvailabilityApi, AvailabilityFilter> {
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

    pub async fn create(&mut self, form: &AvailabilityForm) -> PageResult<Availability> {
        self.list.create(form).await
    }

    pub async fn update(&mut self, id: i64, form: &AvailabilityForm) -> PageResult<Availability> {
        self.list.update(id, form).await
    }

    pub async fn delete(&mut self, id: i64) -> PageResult<()> {
        self.list.delete(id).await
    }
}
