//! Backend response envelopes
//!
//! Successful responses carry the DTO (or a [`Page`] of DTOs) directly as the
//! JSON body. Failed responses carry an [`ApiErrorBody`].

use serde::{Deserialize, Deserializer, Serialize};

/// Paged list as returned by the backend
///
/// ```json
/// { "content": [...], "totalElements": 42, "totalPages": 5, "number": 0, "size": 10 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    /// Page index (0-based)
    pub number: u32,
    pub size: u32,
}

impl<T> Page<T> {
    /// Wrap an unpaged list as a single page
    pub fn single(content: Vec<T>) -> Self {
        let total = content.len();
        Self {
            content,
            total_elements: total as u64,
            total_pages: 1,
            number: 0,
            size: total as u32,
        }
    }

    pub fn is_last(&self) -> bool {
        self.number + 1 >= self.total_pages
    }
}

/// List endpoint body: some endpoints return a bare array, others a [`Page`]
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListBody<T> {
    List(Vec<T>),
    Page(Page<T>),
}

impl<T> ListBody<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::List(items) => items,
            Self::Page(page) => page.content,
        }
    }
}

/// Error body returned with non-2xx responses
///
/// Every field is optional: some endpoints return `{"message": ...}`, some
/// `{"error": ...}`, some a numeric `code` and per-field `errors` (a map or
/// an array, depending on the endpoint). A `code` that is not a number in
/// `u16` range reads as `None` instead of failing the whole body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, deserialize_with = "lenient_code")]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

fn lenient_code<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_u64)
        .and_then(|c| u16::try_from(c).ok()))
}

impl ApiErrorBody {
    /// Best human-readable message in the body, if any
    pub fn best_message(&self) -> Option<&str> {
        fn text(m: &Option<String>) -> Option<&str> {
            m.as_deref().filter(|m| !m.trim().is_empty())
        }
        text(&self.message).or_else(|| text(&self.error))
    }
}

/// Count-only endpoint response (`{"count": 3}`)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}
