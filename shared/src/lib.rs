//! Shared types for the hospital administration client
//!
//! DTOs for HR and finance resources, the backend response envelopes, and the
//! unified error code table.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use error::{ErrorCategory, ErrorCode};
pub use response::{ApiErrorBody, CountResponse, ListBody, Page};
pub use serde::{Deserialize, Serialize};
