//! HMS Console - page view models for the hospital administration client
//!
//! Pages wrap the [`hms_client`] API handles with list state, client-side
//! filtering, pagination, validated forms and workflow actions. The `hms`
//! binary drives them from the command line.

pub mod cards;
pub mod config;
pub mod crud;
pub mod error;
pub mod forms;
pub mod logger;
pub mod pages;

pub use config::AppConfig;
pub use crud::{CrudList, ListFilter, NoFilter};
pub use error::{PageError, PageResult};
pub use forms::{EditForm, Form, FormErrors};
pub use logger::init_logger;
