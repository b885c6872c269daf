//! Domain API handles
//!
//! One handle per bounded resource. Each is a thin set of functions over
//! [`ApiClient`](crate::ApiClient) with fixed paths under `api/v1/`.
//! CRUD-shaped resources also implement [`CrudResource`] so list pages can be
//! written once for all of them.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Display;

use crate::ClientResult;

/// Fetch-all / get / create / update / delete over one resource
#[async_trait]
pub trait CrudResource: Send + Sync {
    type Item: Send + Sync;
    type Create: Serialize + Send + Sync;
    type Update: Serialize + Send + Sync;
    type Id: Copy + Display + Send + Sync;

    /// Resource name used in log lines
    const NAME: &'static str;

    async fn list(&self) -> ClientResult<Vec<Self::Item>>;
    async fn get(&self, id: Self::Id) -> ClientResult<Self::Item>;
    async fn create(&self, data: &Self::Create) -> ClientResult<Self::Item>;
    async fn update(&self, id: Self::Id, data: &Self::Update) -> ClientResult<Self::Item>;
    async fn delete(&self, id: Self::Id) -> ClientResult<()>;
}

/// Implement [`CrudResource`] for a handle with a `client` field over `$base`
macro_rules! crud_resource {
    ($api:ty, $name:literal, $base:expr, $item:ty, $create:ty, $update:ty) => {
        #[async_trait::async_trait]
        impl $crate::api::CrudResource for $api {
            type Item = $item;
            type Create = $create;
            type Update = $update;
            type Id = i64;

            const NAME: &'static str = $name;

            async fn list(&self) -> $crate::ClientResult<Vec<$item>> {
                self.client.get_list($base, &[]).await
            }

            async fn get(&self, id: i64) -> $crate::ClientResult<$item> {
                self.client.get(&format!("{}/{}", $base, id)).await
            }

            async fn create(&self, data: &$create) -> $crate::ClientResult<$item> {
                self.client.post($base, data).await
            }

            async fn update(&self, id: i64, data: &$update) -> $crate::ClientResult<$item> {
                self.client.put(&format!("{}/{}", $base, id), data).await
            }

            async fn delete(&self, id: i64) -> $crate::ClientResult<()> {
                self.client.delete(&format!("{}/{}", $base, id)).await
            }
        }
    };
}

mod accounts;
mod availability;
mod doctor_schedules;
mod employee_schedules;
mod employees;
mod inpatient;
mod time_off;
mod work_shifts;

pub use accounts::AccountApi;
pub use availability::AvailabilityApi;
pub use doctor_schedules::DoctorScheduleApi;
pub use employee_schedules::EmployeeScheduleApi;
pub use employees::EmployeeApi;
pub use inpatient::InpatientApi;
pub use time_off::TimeOffApi;
pub use work_shifts::WorkShiftApi;
