//! Unified error codes for the hospital administration client
//!
//! Codes are numeric so they survive the round trip through the backend's
//! JSON error body (`{"code": 8001, "message": "..."}`).
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Scheduling errors
//! - 4xxx: Leave errors
//! - 5xxx: Payment errors
//! - 6xxx: Inpatient errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Session has expired
    SessionExpired = 1005,
    /// Account is locked
    AccountLocked = 1006,
    /// Account is disabled
    AccountDisabled = 1007,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// HR role required
    HrRoleRequired = 2002,

    // ==================== 3xxx: Scheduling ====================
    /// Schedule overlaps an existing one
    ScheduleConflict = 3001,
    /// Schedule not found
    ScheduleNotFound = 3002,
    /// Work shift not found
    WorkShiftNotFound = 3003,
    /// Employee is not available in the requested slot
    EmployeeUnavailable = 3004,

    // ==================== 4xxx: Leave ====================
    /// Time-off request not found
    TimeOffNotFound = 4001,
    /// Not enough leave balance for the request
    InsufficientLeaveBalance = 4002,
    /// Request is not in a state that allows the action
    TimeOffInvalidState = 4003,
    /// Request overlaps an existing request
    TimeOffOverlap = 4004,

    // ==================== 5xxx: Payment ====================
    /// Payment processing failed
    PaymentFailed = 5001,
    /// Insufficient payment amount
    PaymentInsufficientAmount = 5002,
    /// Invalid payment method
    PaymentInvalidMethod = 5003,
    /// Invoice has already been paid
    InvoiceAlreadyPaid = 5004,
    /// Refund amount exceeds deposit balance
    RefundExceedsBalance = 5005,

    // ==================== 6xxx: Inpatient ====================
    /// Inpatient stay not found
    StayNotFound = 6001,
    /// Stay has already been settled
    StayAlreadySettled = 6002,
    /// Stay still has unpaid invoices
    StayHasOutstandingInvoices = 6003,

    // ==================== 8xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Employee code already exists
    EmployeeCodeExists = 8002,
    /// Employee already has an account
    EmployeeHasAccount = 8003,
    /// Account username already exists
    UsernameExists = 8004,
    /// Department not found
    DepartmentNotFound = 8005,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Network error
    NetworkError = 9002,
    /// Request timed out
    TimeoutError = 9003,
    /// Client configuration error
    ConfigError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check whether this code denotes success
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::SessionExpired => "Session has expired",
            ErrorCode::AccountLocked => "Account is locked",
            ErrorCode::AccountDisabled => "Account is disabled",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::HrRoleRequired => "HR role is required",

            // Scheduling
            ErrorCode::ScheduleConflict => "Schedule conflicts with an existing schedule",
            ErrorCode::ScheduleNotFound => "Schedule not found",
            ErrorCode::WorkShiftNotFound => "Work shift not found",
            ErrorCode::EmployeeUnavailable => "Employee is not available",

            // Leave
            ErrorCode::TimeOffNotFound => "Time-off request not found",
            ErrorCode::InsufficientLeaveBalance => "Insufficient leave balance",
            ErrorCode::TimeOffInvalidState => "Time-off request cannot be changed in its current state",
            ErrorCode::TimeOffOverlap => "Time-off request overlaps an existing request",

            // Payment
            ErrorCode::PaymentFailed => "Payment processing failed",
            ErrorCode::PaymentInsufficientAmount => "Payment amount is insufficient",
            ErrorCode::PaymentInvalidMethod => "Invalid payment method",
            ErrorCode::InvoiceAlreadyPaid => "Invoice has already been paid",
            ErrorCode::RefundExceedsBalance => "Refund amount exceeds the deposit balance",

            // Inpatient
            ErrorCode::StayNotFound => "Inpatient stay not found",
            ErrorCode::StayAlreadySettled => "Inpatient stay has already been settled",
            ErrorCode::StayHasOutstandingInvoices => "Inpatient stay has outstanding invoices",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeCodeExists => "Employee code already exists",
            ErrorCode::EmployeeHasAccount => "Employee already has an account",
            ErrorCode::UsernameExists => "Username already exists",
            ErrorCode::DepartmentNotFound => "Department not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Request timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when a numeric value is not a known error code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),

            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1005 => Ok(ErrorCode::SessionExpired),
            1006 => Ok(ErrorCode::AccountLocked),
            1007 => Ok(ErrorCode::AccountDisabled),

            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::HrRoleRequired),

            3001 => Ok(ErrorCode::ScheduleConflict),
            3002 => Ok(ErrorCode::ScheduleNotFound),
            3003 => Ok(ErrorCode::WorkShiftNotFound),
            3004 => Ok(ErrorCode::EmployeeUnavailable),

            4001 => Ok(ErrorCode::TimeOffNotFound),
            4002 => Ok(ErrorCode::InsufficientLeaveBalance),
            4003 => Ok(ErrorCode::TimeOffInvalidState),
            4004 => Ok(ErrorCode::TimeOffOverlap),

            5001 => Ok(ErrorCode::PaymentFailed),
            5002 => Ok(ErrorCode::PaymentInsufficientAmount),
            5003 => Ok(ErrorCode::PaymentInvalidMethod),
            5004 => Ok(ErrorCode::InvoiceAlreadyPaid),
            5005 => Ok(ErrorCode::RefundExceedsBalance),

            6001 => Ok(ErrorCode::StayNotFound),
            6002 => Ok(ErrorCode::StayAlreadySettled),
            6003 => Ok(ErrorCode::StayHasOutstandingInvoices),

            8001 => Ok(ErrorCode::EmployeeNotFound),
            8002 => Ok(ErrorCode::EmployeeCodeExists),
            8003 => Ok(ErrorCode::EmployeeHasAccount),
            8004 => Ok(ErrorCode::UsernameExists),
            8005 => Ok(ErrorCode::DepartmentNotFound),

            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::NetworkError),
            9003 => Ok(ErrorCode::TimeoutError),
            9004 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::SessionExpired.code(), 1005);
        assert_eq!(ErrorCode::ScheduleConflict.code(), 3001);
        assert_eq!(ErrorCode::InsufficientLeaveBalance.code(), 4002);
        assert_eq!(ErrorCode::RefundExceedsBalance.code(), 5005);
        assert_eq!(ErrorCode::StayAlreadySettled.code(), 6002);
        assert_eq!(ErrorCode::EmployeeCodeExists.code(), 8002);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_roundtrip_known_codes() {
        for code in [
            ErrorCode::Success,
            ErrorCode::RequiredField,
            ErrorCode::AccountLocked,
            ErrorCode::HrRoleRequired,
            ErrorCode::EmployeeUnavailable,
            ErrorCode::TimeOffOverlap,
            ErrorCode::InvoiceAlreadyPaid,
            ErrorCode::StayHasOutstandingInvoices,
            ErrorCode::DepartmentNotFound,
            ErrorCode::ConfigError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_unknown() {
        assert_eq!(ErrorCode::try_from(6), Err(InvalidErrorCode(6)));
        assert_eq!(ErrorCode::try_from(7001), Err(InvalidErrorCode(7001)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::TimeOffNotFound).unwrap();
        assert_eq!(json, "4001");

        let code: ErrorCode = serde_json::from_str("8001").unwrap();
        assert_eq!(code, ErrorCode::EmployeeNotFound);

        assert!(serde_json::from_str::<ErrorCode>("4242").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::NotFound.to_string(), "E0003");
        assert_eq!(ErrorCode::PaymentFailed.to_string(), "E5001");
        assert_eq!(
            InvalidErrorCode(999).to_string(),
            "invalid error code: 999"
        );
    }
}
