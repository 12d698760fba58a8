//! Account service - Creates and maintains user accounts.
//!
//! The factory is composed from an `AccountStore` and a `PasswordHasher`
//! instead of inheriting persistence and hashing behavior.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{is_blank, normalize_email, Password, PasswordHasher, UserAccount};

use crate::repository::AccountStore;

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create a regular account; `password: None` leaves it unusable
    async fn create_user(
        &self,
        email: &str,
        name: &str,
        password: Option<&str>,
    ) -> AppResult<UserAccount>;

    /// Create an account with staff and superuser privileges
    async fn create_superuser(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> AppResult<UserAccount>;

    /// Look an account up by its login email
    async fn get_by_email(&self, email: &str) -> AppResult<UserAccount>;

    /// Verify a plain text password against the account's stored hash
    fn check_password(&self, account: &UserAccount, plain_text: &str) -> bool;

    /// Replace the account's password; `None` makes it unusable
    async fn set_password(&self, email: &str, password: Option<&str>) -> AppResult<UserAccount>;

    /// Delete the account together with its feed items
    async fn delete_account(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of AccountService.
pub struct UserAccountFactory {
    store: Arc<dyn AccountStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserAccountFactory {
    /// Create new factory from its storage and hashing capabilities
    pub fn new(store: Arc<dyn AccountStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    fn make_password(&self, plain_text: Option<&str>) -> AppResult<Password> {
        Ok(Password::from_optional(self.hasher.as_ref(), plain_text)?)
    }
}

#[async_trait]
impl AccountService for UserAccountFactory {
    async fn create_user(
        &self,
        email: &str,
        name: &str,
        password: Option<&str>,
    ) -> AppResult<UserAccount> {
        if is_blank(email) {
            return Err(AppError::validation("User must have an email address"));
        }

        let email = normalize_email(email);
        let password = self.make_password(password)?;
        let account = self
            .store
            .create(UserAccount::new(email, name.to_string(), password))
            .await?;

        info!(account_id = %account.id, "User account created");
        Ok(account)
    }

    async fn create_superuser(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> AppResult<UserAccount> {
        let mut account = self.create_user(email, name, Some(password)).await?;

        account.promote_to_superuser();
        let account = self.store.update(account).await?;

        info!(account_id = %account.id, "User account promoted to superuser");
        Ok(account)
    }

    async fn get_by_email(&self, email: &str) -> AppResult<UserAccount> {
        let email = normalize_email(email);
        debug!(email = %email, "Looking up account");

        self.store.find_by_email(&email).await?.ok_or_not_found()
    }

    fn check_password(&self, account: &UserAccount, plain_text: &str) -> bool {
        account.check_password(self.hasher.as_ref(), plain_text)
    }

    async fn set_password(&self, email: &str, password: Option<&str>) -> AppResult<UserAccount> {
        let mut account = self.get_by_email(email).await?;

        account.set_password(self.make_password(password)?);
        let account = self.store.update(account).await?;

        info!(account_id = %account.id, "Password changed");
        Ok(account)
    }

    async fn delete_account(&self, id: Uuid) -> AppResult<()> {
        self.store.delete(id).await?;

        info!(account_id = %id, "User account deleted");
        Ok(())
    }
}
