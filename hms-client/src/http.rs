//! HTTP client wrapper for the hospital backend
//!
//! Every request reads the access token from the [`TokenStore`] and attaches
//! it as a bearer token. 401/403 become [`ClientError::SessionExpired`]; other
//! non-2xx statuses become [`ClientError::Api`] carrying the server message.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{ApiErrorBody, ErrorCode, ListBody};

use crate::api::{
    AccountApi, AvailabilityApi, DoctorScheduleApi, EmployeeApi, EmployeeScheduleApi,
    InpatientApi, TimeOffApi, WorkShiftApi,
};
use crate::auth::AuthApi;
use crate::token::TokenStore;
use crate::{ClientConfig, ClientError, ClientResult};

/// Query string pairs
pub type Query<'a> = [(&'a str, String)];

/// HTTP client for the backend REST API
///
/// Cheap to clone: the connection pool and token store are shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Self::with_token_store(config, config.token_store())
    }

    /// Create a client with an explicit token store
    pub fn with_token_store(
        config: &ClientConfig,
        tokens: Arc<dyn TokenStore>,
    ) -> ClientResult<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url,
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Whether an access token is currently stored
    pub fn is_logged_in(&self) -> bool {
        self.tokens.access_token().is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // ========== Resource handles ==========

    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    pub fn employees(&self) -> EmployeeApi {
        EmployeeApi::new(self.clone())
    }

    pub fn accounts(&self) -> AccountApi {
        AccountApi::new(self.clone())
    }

    pub fn doctor_schedules(&self) -> DoctorScheduleApi {
        DoctorScheduleApi::new(self.clone())
    }

    pub fn employee_schedules(&self) -> EmployeeScheduleApi {
        EmployeeScheduleApi::new(self.clone())
    }

    pub fn work_shifts(&self) -> WorkShiftApi {
        WorkShiftApi::new(self.clone())
    }

    pub fn availability(&self) -> AvailabilityApi {
        AvailabilityApi::new(self.clone())
    }

    pub fn time_off(&self) -> TimeOffApi {
        TimeOffApi::new(self.clone())
    }

    pub fn inpatient(&self) -> InpatientApi {
        InpatientApi::new(self.clone())
    }

    // ========== Request core ==========

    /// Send a request and return the raw body of a successful response
    async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        query: &Query<'_>,
        body: Option<&B>,
    ) -> ClientResult<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let mut request = self.client.request(method.clone(), &url);

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = self.tokens.access_token() {
            request = request.bearer_auth(token);
        }

        tracing::debug!(%method, %url, "API request");

        let response = request.send().await.map_err(|e| {
            tracing::error!(%method, %url, error = %e, "API request failed");
            ClientError::Http(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!(%method, %url, error = %e, "Failed to read response body");
            ClientError::Http(e)
        })?;

        tracing::debug!(%method, %url, status = status.as_u16(), "API response");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::warn!(%method, %url, status = status.as_u16(), "Session rejected by server");
            return Err(ClientError::SessionExpired);
        }

        if !status.is_success() {
            let err = Self::api_error(status, &bytes);
            tracing::error!(%method, %url, status = status.as_u16(), error = %err, "API error");
            return Err(err);
        }

        Ok(bytes.to_vec())
    }

    /// Build the error for a non-2xx, non-auth status
    ///
    /// Message sources, in order: the body's `message`/`error`, the raw body
    /// when it is not JSON, the text for a known `code`, the status reason.
    fn api_error(status: StatusCode, body: &[u8]) -> ClientError {
        let parsed = serde_json::from_slice::<ApiErrorBody>(body).ok();
        let text = String::from_utf8_lossy(body).trim().to_string();

        let code = parsed
            .as_ref()
            .and_then(|b| b.code)
            .and_then(|c| ErrorCode::try_from(c).ok());

        let message = parsed
            .as_ref()
            .and_then(|b| b.best_message())
            .map(str::to_string)
            .or_else(|| (parsed.is_none() && !text.is_empty()).then_some(text))
            .or_else(|| code.map(|c| c.message().to_string()))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        ClientError::Api {
            status: status.as_u16(),
            code,
            message,
        }
    }

    fn decode<T: DeserializeOwned>(path: &str, bytes: &[u8]) -> ClientResult<T> {
        // Empty 2xx bodies (204, or 200 with no content) decode as JSON null
        let bytes: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            bytes
        };
        serde_json::from_slice(bytes).map_err(|e| {
            tracing::error!(path, error = %e, "Failed to decode response");
            ClientError::Serialization(e)
        })
    }

    /// Send a request and decode the JSON response
    pub async fn call<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &Query<'_>,
        body: Option<&B>,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let bytes = self.execute(method, path, query, body).await?;
        Self::decode(path, &bytes)
    }

    /// Send a request and ignore whatever the server returns on success
    pub async fn call_discard<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.execute(method, path, &[], body).await.map(|_| ())
    }

    // ========== Verbs ==========

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.call::<T, ()>(Method::GET, path, &[], None).await
    }

    /// Make a GET request with query parameters
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query<'_>,
    ) -> ClientResult<T> {
        self.call::<T, ()>(Method::GET, path, query, None).await
    }

    /// GET a list endpoint, accepting either a bare array or a page envelope
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query<'_>,
    ) -> ClientResult<Vec<T>> {
        self.get_query::<ListBody<T>>(path, query)
            .await
            .map(ListBody::into_vec)
    }

    /// Make a POST request with JSON body
    pub async fn post<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.call(Method::POST, path, &[], Some(body)).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.call::<T, ()>(Method::POST, path, &[], None).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.call(Method::PUT, path, &[], Some(body)).await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.call(Method::PATCH, path, &[], Some(body)).await
    }

    /// Make a DELETE request, ignoring the response body
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        self.call_discard::<()>(Method::DELETE, path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_base_url() {
        let err = ApiClient::new(&ClientConfig::new("localhost:8080")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_url_join() {
        let client = ApiClient::new(&ClientConfig::new("http://host:8080/")).unwrap();
        assert_eq!(client.base_url(), "http://host:8080");
        assert_eq!(client.url("api/v1/employees"), "http://host:8080/api/v1/employees");
        assert_eq!(client.url("/api/v1/employees"), "http://host:8080/api/v1/employees");
        assert!(!client.is_logged_in());
    }

    #[test]
    fn test_api_error_message_sources() {
        let err = ApiClient::api_error(
            StatusCode::CONFLICT,
            br#"{"code":8002,"message":"Employee code exists"}"#,
        );
        match err {
            ClientError::Api { status, code, message } => {
                assert_eq!(status, 409);
                assert_eq!(code, Some(ErrorCode::EmployeeCodeExists));
                assert_eq!(message, "Employee code exists");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = ApiClient::api_error(StatusCode::INTERNAL_SERVER_ERROR, b"upstream exploded");
        assert_eq!(err.to_string(), "upstream exploded");

        let err = ApiClient::api_error(StatusCode::NOT_FOUND, b"");
        assert_eq!(err.to_string(), "Not Found");

        // JSON body without a usable message falls back to the status reason
        let err = ApiClient::api_error(StatusCode::BAD_REQUEST, br#"{"timestamp":"x"}"#);
        assert_eq!(err.to_string(), "Bad Request");

        // ...or to the code's own text when the code is known
        let err = ApiClient::api_error(StatusCode::CONFLICT, br#"{"code":8002}"#);
        assert_eq!(err.to_string(), "Employee code already exists");
        assert_eq!(err.code(), ErrorCode::EmployeeCodeExists);
    }

    #[test]
    fn test_api_error_reads_message_from_loose_bodies() {
        let err = ApiClient::api_error(
            StatusCode::BAD_REQUEST,
            br#"{"message":"X","errors":[{"field":"a"}]}"#,
        );
        assert_eq!(err.to_string(), "X");

        let err = ApiClient::api_error(StatusCode::BAD_REQUEST, br#"{"code":"E42","message":"X"}"#);
        assert_eq!(err.to_string(), "X");
        assert_eq!(err.code(), ErrorCode::ValidationFailed);

        let err = ApiClient::api_error(
            StatusCode::CONFLICT,
            br#"{"message":"   ","error":"Duplicate username"}"#,
        );
        assert_eq!(err.to_string(), "Duplicate username");
    }

    #[test]
    fn test_decode_empty_body_as_unit_and_option() {
        ApiClient::decode::<()>("p", b"").unwrap();
        assert_eq!(ApiClient::decode::<Option<u8>>("p", b"  ").unwrap(), None);
        assert_eq!(ApiClient::decode::<u8>("p", b"7").unwrap(), 7);
        assert!(ApiClient::decode::<u8>("p", b"").is_err());
    }
}
