//! In-process mock of the hospital backend
//!
//! Every request is recorded; responses are canned per `(method, path)`.
//! Unknown routes answer 404 with a JSON error body.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use hms_client::{ApiClient, ClientConfig, MemoryTokenStore};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Default)]
struct MockState {
    routes: Mutex<HashMap<(String, String), (u16, String)>>,
    requests: Mutex<Vec<Recorded>>,
}

pub struct MockBackend {
    pub base_url: String,
    state: Arc<MockState>,
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).to_string(),
    });

    let canned = state
        .routes
        .lock()
        .unwrap()
        .get(&(method.to_string(), path))
        .cloned();
    let (status, body) =
        canned.unwrap_or((404, r#"{"message":"No mock route"}"#.to_string()));

    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Answer `method path` with a raw status and body
    pub fn route(&self, method: &str, path: &str, status: u16, body: impl Into<String>) {
        self.state
            .routes
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body.into()));
    }

    /// Answer `method path` with 200 and a JSON value
    pub fn json(&self, method: &str, path: &str, value: serde_json::Value) {
        self.route(method, path, 200, value.to_string());
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests().last().cloned().expect("no request recorded")
    }

    pub fn hits(&self, method: &str, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(&self.base_url).with_timeout(5)
    }

    /// Client with an in-memory store already holding `token`
    pub fn client_with_token(&self, token: &str) -> ApiClient {
        ApiClient::with_token_store(&self.config(), Arc::new(MemoryTokenStore::with_access_token(token)))
            .unwrap()
    }

    /// Logged-out client
    pub fn client(&self) -> ApiClient {
        self.config().build().unwrap()
    }
}

pub fn employee_json(id: i64, code: &str, first: &str, last: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "employeeCode": code,
        "person": {"firstName": first, "lastName": last},
        "departmentId": 1,
        "departmentName": "Nội khoa",
        "roleType": "NURSE",
        "isActive": true,
        "hasAccount": false
    })
}
