//! Work Shift API

use shared::models::{WorkShift, WorkShiftCreate, WorkShiftUpdate};

use crate::{ApiClient, ClientResult};

const BASE: &str = "api/v1/work-shifts";

#[derive(Debug, Clone)]
pub struct WorkShiftApi {
    client: ApiClient,
}

crud_resource!(WorkShiftApi, "work_shift", BASE, WorkShift, WorkShiftCreate, WorkShiftUpdate);

impl WorkShiftApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Shifts that can still be assigned
    pub async fn active(&self) -> ClientResult<Vec<WorkShift>> {
        self.client.get_list(&format!("{BASE}/active"), &[]).await
    }
}
