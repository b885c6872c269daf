//! Page-level errors

use hms_client::ClientError;
use shared::ErrorCode;
use thiserror::Error;

use crate::forms::FormErrors;

#[derive(Debug, Error)]
pub enum PageError {
    /// Form input rejected before any request was sent
    #[error("Dữ liệu không hợp lệ: {0}")]
    Validation(FormErrors),

    /// A required action input (note, reason, date range) is blank
    #[error("Thiếu thông tin: {0}")]
    MissingInput(&'static str),

    /// Operation needs data that has not been loaded yet
    #[error("Chưa tải dữ liệu")]
    NotLoaded,

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl PageError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::MissingInput(_) => ErrorCode::RequiredField,
            Self::NotLoaded => ErrorCode::InvalidRequest,
            Self::Client(e) => e.code(),
        }
    }

    pub fn form_errors(&self) -> Option<&FormErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::Client(e) if e.is_session_expired())
    }
}

impl From<FormErrors> for PageError {
    fn from(errors: FormErrors) -> Self {
        Self::Validation(errors)
    }
}

pub type PageResult<T> = Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;
    use hms_client::SESSION_EXPIRED_MESSAGE;

    #[test]
    fn test_codes() {
        let err = PageError::from(FormErrors::single("first_name", "x"));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(err.form_errors().is_some());
        assert_eq!(PageError::MissingInput("note").code(), ErrorCode::RequiredField);
    }

    #[test]
    fn test_session_expired_passes_through() {
        let err = PageError::from(ClientError::SessionExpired);
        assert!(err.is_session_expired());
        assert_eq!(err.to_string(), SESSION_EXPIRED_MESSAGE);
        assert_eq!(err.code(), ErrorCode::SessionExpired);
    }
}
