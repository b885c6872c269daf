//! Time-Off Request Model (leave requests and balances)
//!
//! Status flow as the backend drives it:
//!
//! ```text
//! PENDING ──approve──> APPROVED ──withdraw──> WITHDRAWN
//!    └─────reject────> REJECTED
//! (any) ──server-side──> CANCELLED
//! ```
//!
//! The client never enforces these transitions. [`TimeOffAction::available`]
//! only decides which actions to offer.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight leave types the backend keeps a balance for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveType {
    Annual,
    Sick,
    Maternity,
    Paternity,
    Unpaid,
    Bereavement,
    Marriage,
    Compensatory,
}

impl LeaveType {
    pub const ALL: [LeaveType; 8] = [
        LeaveType::Annual,
        LeaveType::Sick,
        LeaveType::Maternity,
        LeaveType::Paternity,
        LeaveType::Unpaid,
        LeaveType::Bereavement,
        LeaveType::Marriage,
        LeaveType::Compensatory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "ANNUAL",
            Self::Sick => "SICK",
            Self::Maternity => "MATERNITY",
            Self::Paternity => "PATERNITY",
            Self::Unpaid => "UNPAID",
            Self::Bereavement => "BEREAVEMENT",
            Self::Marriage => "MARRIAGE",
            Self::Compensatory => "COMPENSATORY",
        }
    }

    /// Vietnamese display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Annual => "Nghỉ phép năm",
            Self::Sick => "Nghỉ ốm",
            Self::Maternity => "Nghỉ thai sản",
            Self::Paternity => "Nghỉ chăm con",
            Self::Unpaid => "Nghỉ không lương",
            Self::Bereavement => "Nghỉ tang",
            Self::Marriage => "Nghỉ cưới",
            Self::Compensatory => "Nghỉ bù",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LeaveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| format!("unknown leave type: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeOffStatus {
    Pending,
    Approved,
    Rejected,
    Withdrawn,
    Cancelled,
}

impl TimeOffStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Withdrawn => "WITHDRAWN",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for TimeOffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeOffStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "WITHDRAWN" => Ok(Self::Withdrawn),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(format!("unknown time-off status: {s}")),
        }
    }
}

/// Which side of the workflow the current user is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Employee,
    Hr,
}

/// Actions a user can take on a time-off request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOffAction {
    Approve,
    Reject,
    Withdraw,
    Delete,
}

impl TimeOffAction {
    /// Actions to offer for a request in `status`, seen by `role`
    pub fn available(status: TimeOffStatus, role: UserRole) -> &'static [TimeOffAction] {
        match (role, status) {
            (UserRole::Hr, TimeOffStatus::Pending) => &[Self::Approve, Self::Reject],
            (UserRole::Employee, TimeOffStatus::Pending) => &[Self::Delete],
            (UserRole::Employee, TimeOffStatus::Approved) => &[Self::Withdraw],
            _ => &[],
        }
    }
}

/// Time-off request record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffRequest {
    pub request_id: i64,
    pub employee_id: i64,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: f64,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: TimeOffStatus,
    #[serde(default)]
    pub approver_note: Option<String>,
    #[serde(default)]
    pub reject_reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl TimeOffRequest {
    /// Whether the leave period intersects `[from, to]`
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start_date <= to && self.end_date >= from
    }

    pub fn actions_for(&self, role: UserRole) -> &'static [TimeOffAction] {
        TimeOffAction::available(self.status, role)
    }
}

/// Create time-off request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffCreate {
    pub employee_id: i64,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Update time-off request payload (only while PENDING, enforced server-side)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<LeaveType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Approve payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproveRequest {
    pub note: String,
}

/// Reject payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectRequest {
    pub reason: String,
}

/// Per-type leave balance for one employee and year
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalance {
    pub total_days: f64,
    pub used_days: f64,
    pub remaining_days: f64,
}

impl std::ops::Add for LeaveBalance {
    type Output = LeaveBalance;

    fn add(self, rhs: LeaveBalance) -> LeaveBalance {
        LeaveBalance {
            total_days: self.total_days + rhs.total_days,
            used_days: self.used_days + rhs.used_days,
            remaining_days: self.remaining_days + rhs.remaining_days,
        }
    }
}

impl std::iter::Sum for LeaveBalance {
    fn sum<I: Iterator<Item = LeaveBalance>>(iter: I) -> Self {
        iter.fold(LeaveBalance::default(), |acc, b| acc + b)
    }
}
