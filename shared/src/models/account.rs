//! Account Model (login accounts bound to employees)

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Account response (without password)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_id: i64,
    pub employee_id: i64,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub username: String,
    pub role: String,
    pub is_active: bool,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default)]
    pub last_login_at: Option<NaiveDateTime>,
}

/// Create account payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCreate {
    pub employee_id: i64,
    pub username: String,
    pub password: String,
    pub role: String,
}

/// Update account payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Reset password payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReset {
    pub new_password: String,
}
