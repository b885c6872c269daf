//! Work shift templates page

use hms_client::{ApiClient, WorkShiftApi};
use shared::models::{ShiftType, WorkShift};

use crate::crud::{CrudList, ListFilter, text_matches};
use crate::error::PageResult;
use crate::forms::WorkShiftForm;

#[derive(Debug, Clone, Default)]
pub struct WorkShiftFilter {
    pub text: Option<String>,
    pub shift_type: Option<ShiftType>,
    pub active_only: bool,
}

impl ListFilter<WorkShift> for WorkShiftFilter {
    fn matches(&self, s: &WorkShift) -> bool {
        text_matches(self.text.as_deref(), &[s.shift_name.as_str()])
            && self.shift_type.is_none_or(|t| t == s.shift_type)
            && (!self.active_only || s.is_active)
    }
}

pub struct WorkShiftPage {
    list: CrudList<WorkShiftApi, WorkShiftFilter>,
}

impl WorkShiftPage {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            list: CrudList::new(client.work_shifts()),
        }
    }

    pub fn list(&self) -> &CrudList<WorkShiftApi, WorkShiftFilter> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut CrudList<WorkShiftApi, WorkShiftFilter> {
        &mut self.list
    }

    pub async fn load(&mut self) -> PageResult<usize> {
        self.list.load().await
    }

    /// Only the shifts the server reports as assignable
    pub async fn load_active(&mut self) -> PageResult<usize> {
        let found = self.list.resource().active().await?;
        let count = found.len();
        self.list.replace_items(found);
        Ok(count)
    }

    pub async fn create(&mut self, form: &WorkShiftForm) -> PageResult<WorkShift> {
        self.list.create(form).await
    }

    pub async fn update(&mut self, id: i64, form: &WorkShiftForm) -> PageResult<WorkShift> {
        self.list.update(id, form).await
    }

    pub async fn delete(&mut self, id: i64) -> PageResult<()> {
        self.list.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_active_only() {
        let shift = WorkShift {
            work_shift_id: 1,
            shift_name: "Ca sáng".into(),
            start_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(11, 30, 0).unwrap(),
            shift_type: ShiftType::Morning,
            is_active: false,
        };
        assert!(WorkShiftFilter::default().matches(&shift));
        assert!(
            !WorkShiftFilter {
                active_only: true,
                ..Default::default()
            }
            .matches(&shift)
        );
        assert!(
            WorkShiftFilter {
                text: Some("sáng".into()),
                shift_type: Some(ShiftType::Morning),
                active_only: false,
            }
            .matches(&shift)
        );
    }
}
