//! Page view models
//!
//! A page owns an API handle and the state one screen needs. Loading and
//! actions are async and return [`PageResult`](crate::error::PageResult).

mod accounts;
mod availability;
mod employees;
mod inpatient;
mod leave_balance;
mod schedules;
mod time_off;
mod work_shifts;

pub use accounts::{AccountFilter, AccountPage, MIN_PASSWORD_LEN};
pub use availability::{AvailabilityFilter, AvailabilityPage};
pub use employees::{EmployeeFilter, EmployeePage, EmployeeSearch, SearchRoute};
pub use inpatient::InpatientPaymentPage;
pub use leave_balance::{LeaveBalanceEntry, LeaveBalanceWidget};
pub use schedules::{
    DoctorScheduleFilter, DoctorSchedulePage, EmployeeScheduleFilter, EmployeeSchedulePage,
};
pub use time_off::TimeOffPage;
pub use work_shifts::{WorkShiftFilter, WorkShiftPage};
