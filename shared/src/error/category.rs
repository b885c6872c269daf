//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code.
/// 7xxx is unassigned and falls back to `System`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Scheduling errors (3xxx)
    Schedule,
    /// Leave errors (4xxx)
    Leave,
    /// Payment errors (5xxx)
    Payment,
    /// Inpatient errors (6xxx)
    Inpatient,
    /// Employee errors (8xxx)
    Employee,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Schedule,
            4000..5000 => Self::Leave,
            5000..6000 => Self::Payment,
            6000..7000 => Self::Inpatient,
            8000..9000 => Self::Employee,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Schedule => "schedule",
            Self::Leave => "leave",
            Self::Payment => "payment",
            Self::Inpatient => "inpatient",
            Self::Employee => "employee",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1005), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Schedule);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Leave);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Payment);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Inpatient);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(8001), ErrorCategory::Employee);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::SessionExpired.category(), ErrorCategory::Auth);
        assert_eq!(
            ErrorCode::InsufficientLeaveBalance.category(),
            ErrorCategory::Leave
        );
        assert_eq!(
            ErrorCode::RefundExceedsBalance.category(),
            ErrorCategory::Payment
        );
        assert_eq!(
            ErrorCode::EmployeeNotFound.category(),
            ErrorCategory::Employee
        );
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Inpatient).unwrap();
        assert_eq!(json, "\"inpatient\"");

        let category: ErrorCategory = serde_json::from_str("\"leave\"").unwrap();
        assert_eq!(category, ErrorCategory::Leave);
    }
}
