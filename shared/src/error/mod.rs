//! Unified error codes
//!
//! - [`ErrorCode`]: Standardized error codes shared with the backend
//! - [`ErrorCategory`]: Classification of errors by domain
//!
//! # Example
//!
//! ```
//! use shared::error::{ErrorCategory, ErrorCode};
//!
//! let code = ErrorCode::try_from(4002).unwrap();
//! assert_eq!(code, ErrorCode::InsufficientLeaveBalance);
//! assert_eq!(code.category(), ErrorCategory::Leave);
//! ```

mod category;
mod codes;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
