//! Employee Availability API

use shared::models::{Availability, AvailabilityCreate, AvailabilityUpdate};

use crate::{ApiClient, ClientResult};

const BASE: &str = "api/v1/availability";

#[derive(Debug, Clone)]
pub struct AvailabilityApi {
    client: ApiClient,
}

crud_resource!(
    AvailabilityApi,
    "availability",
    BASE,
    Availability,
    AvailabilityCreate,
    AvailabilityUpdate
);

impl AvailabilityApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn by_employee(&self, employee_id: i64) -> ClientResult<Vec<Availability>> {
        self.client
            .get_list(&format!("{BASE}/employee/{employee_id}"), &[])
            .await
    }
}
