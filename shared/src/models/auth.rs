//! Auth DTOs

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

/// Logged-in user information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub account_id: i64,
    pub employee_id: Option<i64>,
    pub username: String,
    /// Account role, e.g. "HR", "DOCTOR", "ADMIN"
    pub role: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl UserInfo {
    /// HR and admin accounts get the HR view of leave requests
    pub fn is_hr(&self) -> bool {
        matches!(self.role.to_ascii_uppercase().as_str(), "HR" | "ADMIN")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_deserialize() {
        let json = r#"{
            "accessToken": "a.b.c",
            "refreshToken": "r.e.f",
            "user": {"accountId": 7, "employeeId": 12, "username": "lan.nguyen", "role": "hr"}
        }"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "a.b.c");
        assert_eq!(resp.user.employee_id, Some(12));
        assert!(resp.user.is_hr());
        assert_eq!(resp.user.full_name, None);
    }
}
