//! Auth API: login, logout, current user

use shared::models::{LoginRequest, LoginResponse, UserInfo};

use crate::token::StoredTokens;
use crate::{ApiClient, ClientResult};

const LOGIN_PATH: &str = "api/v1/auth/login";
const LOGOUT_PATH: &str = "api/v1/auth/logout";
const ME_PATH: &str = "api/v1/auth/me";

#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Login with username and password, storing both tokens on success
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<UserInfo> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self.client.post(LOGIN_PATH, &request).await?;

        let tokens = StoredTokens::new(response.access_token, Some(response.refresh_token))
            .with_username(&response.user.username);
        self.client.tokens().save(&tokens)?;

        tracing::info!(username = %response.user.username, role = %response.user.role, "Logged in");
        Ok(response.user)
    }

    /// Get current user information
    pub async fn me(&self) -> ClientResult<UserInfo> {
        self.client.get(ME_PATH).await
    }

    /// Logout: tell the server, then drop the local tokens regardless of the outcome
    pub async fn logout(&self) -> ClientResult<()> {
        if self.client.is_logged_in()
            && let Err(e) = self.client.call_discard::<()>(reqwest::Method::POST, LOGOUT_PATH, None).await
        {
            tracing::warn!(error = %e, "Server-side logout failed, clearing local session anyway");
        }
        self.client.tokens().clear()?;
        tracing::info!("Logged out");
        Ok(())
    }
}
