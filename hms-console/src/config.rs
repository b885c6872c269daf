//! Console configuration
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | HMS_API_BASE_URL | http://localhost:8080 | Backend base URL |
//! | HMS_TOKEN_FILE | $HOME/.hms/tokens.json | Where the login session is kept |
//! | HMS_TIMEOUT_SECS | 30 | Request timeout |
//! | HMS_LOG_LEVEL | warn | Default log filter (RUST_LOG wins when set) |
//! | HMS_LOG_DIR | unset | Daily rolling log files are written here when set |
//! | HMS_LOG_JSON | false | JSON log lines on stderr |

use std::path::PathBuf;

use hms_client::ClientConfig;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub token_file: Option<PathBuf>,
    pub timeout_secs: u64,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    pub log_json: bool,
}

impl AppConfig {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key → value source; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_base_url: get("HMS_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            token_file: get("HMS_TOKEN_FILE").map(PathBuf::from).or_else(|| {
                get("HOME").map(|home| PathBuf::from(home).join(".hms").join("tokens.json"))
            }),
            timeout_secs: get("HMS_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            log_level: get("HMS_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.into()),
            log_dir: get("HMS_LOG_DIR").map(PathBuf::from),
            log_json: get("HMS_LOG_JSON")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.api_base_url).with_timeout(self.timeout_secs);
        match &self.token_file {
            Some(path) => config.with_token_file(path),
            None => config,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
