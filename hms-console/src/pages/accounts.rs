//! Account management page

use hms_client::{AccountApi, ApiClient};
use shared::models::Account;

use crate::crud::{CrudList, ListFilter, text_matches};
use crate::error::{PageError, PageResult};
use crate::forms::{AccountForm, FormErrors};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default)]
pub struct AccountFilter {
    /// Matches username or employee name
    pub text: Option<String>,
    pub role: Option<String>,
    pub locked: Option<bool>,
}

impl ListFilter<Account> for AccountFilter {
    fn matches(&self, a: &Account) -> bool {
        text_matches(
            self.text.as_deref(),
            &[a.username.as_str(), a.employee_name.as_deref().unwrap_or("")],
        ) && self
            .role
            .as_deref()
            .is_none_or(|r| r.eq_ignore_ascii_case(&a.role))
            && self.locked.is_none_or(|l| l == a.is_locked)
    }
}

pub struct AccountPage {
    list: CrudList<AccountApi, AccountFilter>,
}

impl AccountPage {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            list: CrudList::new(client.accounts()),
        }
    }

    pub fn list(&self) -> &CrudList<AccountApi, AccountFilter> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut CrudList<AccountApi, AccountFilter> {
        &mut self.list
    }

    pub async fn load(&mut self) -> PageResult<usize> {
        self.list.load().await
    }

    pub async fn create(&mut self, form: &AccountForm) -> PageResult<Account> {
        self.list.create(form).await
    }

    pub async fn update(&mut self, id: i64, form: &AccountForm) -> PageResult<Account> {
        self.list.update(id, form).await
    }

    pub async fn delete(&mut self, id: i64) -> PageResult<()> {
        self.list.delete(id).await
    }

    pub async fn reset_password(&mut self, id: i64, new_password: &str) -> PageResult<()> {
        if new_password.trim().is_empty() {
            return Err(PageError::MissingInput("new_password"));
        }
        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(PageError::Validation(FormErrors::single(
                "new_password",
                format!("Mật khẩu phải có ít nhất {MIN_PASSWORD_LEN} ký tự"),
            )));
        }
        self.list.resource().reset_password(id, new_password).await?;
        tracing::info!(account_id = id, "Password reset");
        Ok(())
    }

    pub async fn set_locked(&mut self, id: i64, locked: bool) -> PageResult<()> {
        let api = self.list.resource();
        if locked {
            api.lock(id).await?;
        } else {
            api.unlock(id).await?;
        }
        tracing::info!(account_id = id, locked, "Account lock changed");
        self.list.load().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_filter() {
        let account = Account {
            account_id: 1,
            employee_id: 2,
            employee_name: Some("Nguyen Lan".into()),
            username: "lan.nguyen".into(),
            role: "HR".into(),
            is_active: true,
            is_locked: false,
            last_login_at: None,
        };
        assert!(
            AccountFilter {
                text: Some("LAN".into()),
                role: Some("hr".into()),
                locked: Some(false),
            }
            .matches(&account)
        );
        assert!(
            !AccountFilter {
                locked: Some(true),
                ..Default::default()
            }
            .matches(&account)
        );
    }
}
