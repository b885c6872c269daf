//! Client error types

use shared::ErrorCode;
use thiserror::Error;

/// Message shown whenever the backend rejects the bearer token (401/403).
pub const SESSION_EXPIRED_MESSAGE: &str = "Phiên đăng nhập đã hết hạn. Vui lòng đăng nhập lại.";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure or unreadable response body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered 401 or 403; the user must log in again
    #[error("{}", SESSION_EXPIRED_MESSAGE)]
    SessionExpired,

    /// Backend answered with any other non-2xx status
    #[error("{message}")]
    Api {
        status: u16,
        code: Option<ErrorCode>,
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading or writing the token file failed
    #[error("Token store error: {0}")]
    TokenStore(#[from] std::io::Error),

    /// Client configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }

    /// Map to the most specific [`ErrorCode`]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            Self::Http(_) => ErrorCode::NetworkError,
            Self::SessionExpired => ErrorCode::SessionExpired,
            Self::Api { code: Some(code), .. } => *code,
            Self::Api { status, .. } => match *status {
                400 | 422 => ErrorCode::ValidationFailed,
                404 => ErrorCode::NotFound,
                409 => ErrorCode::AlreadyExists,
                _ => ErrorCode::InternalError,
            },
            Self::Serialization(_) => ErrorCode::InternalError,
            Self::TokenStore(_) | Self::Config(_) => ErrorCode::ConfigError,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_expired_message() {
        assert_eq!(ClientError::SessionExpired.to_string(), SESSION_EXPIRED_MESSAGE);
        assert!(ClientError::SessionExpired.is_session_expired());
        assert_eq!(ClientError::SessionExpired.code(), ErrorCode::SessionExpired);
    }

    #[test]
    fn test_api_error_code_mapping() {
        let with_code = ClientError::Api {
            status: 409,
            code: Some(ErrorCode::EmployeeCodeExists),
            message: "Mã nhân viên đã tồn tại".into(),
        };
        assert_eq!(with_code.code(), ErrorCode::EmployeeCodeExists);
        assert_eq!(with_code.to_string(), "Mã nhân viên đã tồn tại");

        let not_found = ClientError::Api {
            status: 404,
            code: None,
            message: "Not Found".into(),
        };
        assert_eq!(not_found.code(), ErrorCode::NotFound);

        let server = ClientError::Api {
            status: 502,
            code: None,
            message: "Bad Gateway".into(),
        };
        assert_eq!(server.code(), ErrorCode::InternalError);
    }
}
