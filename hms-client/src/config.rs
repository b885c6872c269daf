//! Client configuration

use std::path::PathBuf;
use std::sync::Arc;

use crate::token::{FileTokenStore, MemoryTokenStore, TokenStore};
use crate::{ApiClient, ClientResult};

/// Client configuration for connecting to the hospital backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Token file; `None` keeps tokens in memory only
    pub token_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            token_file: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Persist tokens to a JSON file
    pub fn with_token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_file = Some(path.into());
        self
    }

    /// Token store selected by this configuration
    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        match &self.token_file {
            Some(path) => Arc::new(FileTokenStore::new(path)),
            None => Arc::new(MemoryTokenStore::new()),
        }
    }

    /// Create an API client from this configuration
    pub fn build(&self) -> ClientResult<ApiClient> {
        ApiClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
