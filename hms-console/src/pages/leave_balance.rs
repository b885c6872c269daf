//! Leave balance widget
//!
//! One balance request per leave type, issued together. A failed request is
//! logged and shown as zero; the widget itself never fails.

use futures::future::join_all;
use hms_client::{ApiClient, TimeOffApi};
use shared::models::{LeaveBalance, LeaveType};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaveBalanceEntry {
    pub leave_type: LeaveType,
    pub balance: LeaveBalance,
    /// The request for this type failed and `balance` is the zero default
    pub failed: bool,
}

pub struct LeaveBalanceWidget {
    api: TimeOffApi,
    employee_id: i64,
    year: i32,
    entries: Vec<LeaveBalanceEntry>,
}

impl LeaveBalanceWidget {
    pub fn new(client: &ApiClient, employee_id: i64, year: i32) -> Self {
        Self {
            api: client.time_off(),
            employee_id,
            year,
            entries: Vec::new(),
        }
    }

    pub fn employee_id(&self) -> i64 {
        self.employee_id
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Fetch all types; returns how many requests failed
    pub async fn load(&mut self) -> usize {
        let (employee_id, year) = (self.employee_id, self.year);
        let results = join_all(
            LeaveType::ALL
                .iter()
                .map(|&leave_type| self.api.balance(employee_id, year, leave_type)),
        )
        .await;

        self.entries = LeaveType::ALL
            .iter()
            .zip(results)
            .map(|(&leave_type, result)| match result {
                Ok(balance) => LeaveBalanceEntry {
                    leave_type,
                    balance,
                    failed: false,
                },
                Err(e) => {
                    tracing::warn!(
                        employee_id,
                        year,
                        leave_type = leave_type.as_str(),
                        error = %e,
                        "Leave balance unavailable, showing zero"
                    );
                    LeaveBalanceEntry {
                        leave_type,
                        balance: LeaveBalance::default(),
                        failed: true,
                    }
                }
            })
            .collect();

        self.entries.iter().filter(|e| e.failed).count()
    }

    /// Per-type entries in [`LeaveType::ALL`] order
    pub fn entries(&self) -> &[LeaveBalanceEntry] {
        &self.entries
    }

    pub fn entry(&self, leave_type: LeaveType) -> Option<&LeaveBalanceEntry> {
        self.entries.iter().find(|e| e.leave_type == leave_type)
    }

    pub fn totals(&self) -> LeaveBalance {
        self.entries.iter().map(|e| e.balance).sum()
    }
}
