//! HMS Client - HTTP client for the hospital management backend
//!
//! Wraps the backend REST API: bearer-token session handling, uniform error
//! mapping, and one typed handle per resource.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod token;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, SESSION_EXPIRED_MESSAGE};
pub use http::{ApiClient, Query};

pub use api::{
    AccountApi, AvailabilityApi, CrudResource, DoctorScheduleApi, EmployeeApi,
    EmployeeScheduleApi, InpatientApi, TimeOffApi, WorkShiftApi,
};
pub use auth::AuthApi;
pub use token::{FileTokenStore, MemoryTokenStore, StoredTokens, TokenStore};

// Re-export shared types for convenience
pub use shared::ErrorCode;
