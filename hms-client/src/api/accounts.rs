//! Account API (login accounts bound to employees)

use reqwest::Method;
use shared::models::{Account, AccountCreate, AccountUpdate, PasswordReset};

use crate::{ApiClient, ClientResult};

const BASE: &str = "api/v1/accounts";

#[derive(Debug, Clone)]
pub struct AccountApi {
    client: ApiClient,
}

crud_resource!(AccountApi, "account", BASE, Account, AccountCreate, AccountUpdate);

impl AccountApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn reset_password(&self, id: i64, new_password: &str) -> ClientResult<()> {
        let body = PasswordReset {
            new_password: new_password.to_string(),
        };
        self.client
            .call_discard(Method::POST, &format!("{BASE}/{id}/reset-password"), Some(&body))
            .await
    }

    pub async fn lock(&self, id: i64) -> ClientResult<()> {
        self.client
            .call_discard::<()>(Method::POST, &format!("{BASE}/{id}/lock"), None)
            .await
    }

    pub async fn unlock(&self, id: i64) -> ClientResult<()> {
        self.client
            .call_discard::<()>(Method::POST, &format!("{BASE}/{id}/unlock"), None)
            .await
    }
}
