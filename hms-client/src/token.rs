//! Bearer token storage
//!
//! The backend issues an access token and a refresh token at login. Both are
//! persisted between runs; the access token is read back on every request.
//! There is no refresh flow: the refresh token is only kept so a later
//! session can present it.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Tokens persisted after login
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTokens {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Username that logged in, for display
    #[serde(default)]
    pub username: Option<String>,
    /// Unix seconds at which the tokens were saved
    #[serde(default)]
    pub saved_at: Option<u64>,
}

impl StoredTokens {
    pub fn new(access_token: impl Into<String>, refresh_token: Option<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token,
            username: None,
            saved_at: Some(chrono::Utc::now().timestamp().max(0) as u64),
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }
}

/// Where the client keeps its tokens
pub trait TokenStore: Send + Sync + Debug {
    fn load(&self) -> Option<StoredTokens>;
    fn save(&self, tokens: &StoredTokens) -> io::Result<()>;
    fn clear(&self) -> io::Result<()>;

    fn access_token(&self) -> Option<String> {
        self.load()
            .map(|t| t.access_token)
            .filter(|t| !t.is_empty())
    }
}

/// JSON file token store
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Ensure the parent directory exists
    fn ensure_dir(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<StoredTokens> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&json) {
            Ok(tokens) => Some(tokens),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring unreadable token file");
                None
            }
        }
    }

    fn save(&self, tokens: &StoredTokens) -> io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(tokens)?;
        fs::write(&self.path, json)
    }

    fn clear(&self) -> io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory token store, lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    inner: RwLock<Option<StoredTokens>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_access_token(token: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(Some(StoredTokens::new(token, None))),
        }
    }
}

fn poisoned() -> io::Error {
    io::Error::other("token store lock poisoned")
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<StoredTokens> {
        self.inner.read().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, tokens: &StoredTokens) -> io::Result<()> {
        let mut guard = self.inner.write().map_err(|_| poisoned())?;
        *guard = Some(tokens.clone());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        let mut guard = self.inner.write().map_err(|_| poisoned())?;
        *guard = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_save_load_clear() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(temp_dir.path().join("session").join("tokens.json"));
        assert!(store.load().is_none());
        assert!(store.access_token().is_none());

        let tokens = StoredTokens::new("access-1", Some("refresh-1".into())).with_username("lan");
        store.save(&tokens).unwrap();
        assert!(store.exists());

        let loaded = store.load().unwrap();
        assert_eq!(loaded, tokens);
        assert_eq!(store.access_token().as_deref(), Some("access-1"));

        store.clear().unwrap();
        assert!(!store.exists());
        assert!(store.load().is_none());
        // clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_ignores_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tokens.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileTokenStore::new(&path);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryTokenStore::with_access_token("abc");
        assert_eq!(store.access_token().as_deref(), Some("abc"));
        store.clear().unwrap();
        assert!(store.access_token().is_none());

        store.save(&StoredTokens::new("", None)).unwrap();
        assert!(store.access_token().is_none(), "empty token is treated as absent");
    }
}
