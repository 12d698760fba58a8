//! User account database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::UserAccount;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::feed_item::Entity")]
    FeedItems,
}

impl Related<super::feed_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeedItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for UserAccount {
    fn from(model: Model) -> Self {
        UserAccount {
            id: model.id,
            email: model.email,
            name: model.name,
            password_hash: model.password_hash,
            is_active: model.is_active,
            is_staff: model.is_staff,
            is_superuser: model.is_superuser,
        }
    }
}

/// Convert domain entity to an insertable active model
impl From<UserAccount> for ActiveModel {
    fn from(account: UserAccount) -> Self {
        ActiveModel {
            id: Set(account.id),
            email: Set(account.email),
            name: Set(account.name),
            password_hash: Set(account.password_hash),
            is_active: Set(account.is_active),
            is_staff: Set(account.is_staff),
            is_superuser: Set(account.is_superuser),
        }
    }
}
