//! Account storage capability and its SeaORM implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::user_account::{self, ActiveModel, Entity as UserAccountEntity};
use common::{AppError, AppResult};
use domain::UserAccount;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account storage capability.
///
/// Constraint violations (duplicate email, oversized fields) are reported
/// by the store as-is.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist a new account
    async fn create(&self, account: UserAccount) -> AppResult<UserAccount>;

    /// Find account by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserAccount>>;

    /// Find account by (already normalized) email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserAccount>>;

    /// Overwrite the stored fields of an existing account
    async fn update(&self, account: UserAccount) -> AppResult<UserAccount>;

    /// Delete account by ID; owned feed items go with it
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM implementation of AccountStore
pub struct SeaAccountStore {
    db: DatabaseConnection,
}

impl SeaAccountStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountStore for SeaAccountStore {
    async fn create(&self, account: UserAccount) -> AppResult<UserAccount> {
        let model = ActiveModel::from(account)
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(UserAccount::from(model))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserAccount>> {
        let result = UserAccountEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(UserAccount::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserAccount>> {
        let result = UserAccountEntity::find()
            .filter(user_account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(UserAccount::from))
    }

    async fn update(&self, account: UserAccount) -> AppResult<UserAccount> {
        let existing = UserAccountEntity::find_by_id(account.id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.email = Set(account.email);
        active.name = Set(account.name);
        active.password_hash = Set(account.password_hash);
        active.is_active = Set(account.is_active);
        active.is_staff = Set(account.is_staff);
        active.is_superuser = Set(account.is_superuser);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(UserAccount::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = UserAccountEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
