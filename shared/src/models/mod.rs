//! Data models
//!
//! DTOs exchanged with the hospital backend. Field names are camelCase on the
//! wire; ids are `i64`.

pub mod account;
pub mod auth;
pub mod availability;
pub mod doctor_schedule;
pub mod employee;
pub mod employee_schedule;
pub mod inpatient;
pub mod time_off;
pub mod work_shift;

// Re-exports
pub use account::*;
pub use auth::*;
pub use availability::*;
pub use doctor_schedule::*;
pub use employee::*;
pub use employee_schedule::*;
pub use inpatient::*;
pub use time_off::*;
pub use work_shift::*;
