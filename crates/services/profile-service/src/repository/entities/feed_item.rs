//! Feed item database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::FeedItem;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "feed_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: Uuid,
    pub status_text: String,
    pub created_on: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_account::Entity",
        from = "Column::OwnerId",
        to = "super::user_account::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,
}

impl Related<super::user_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for FeedItem {
    fn from(model: Model) -> Self {
        FeedItem {
            id: model.id,
            owner_id: model.owner_id,
            status_text: model.status_text,
            created_on: model.created_on,
        }
    }
}

impl From<FeedItem> for ActiveModel {
    fn from(item: FeedItem) -> Self {
        ActiveModel {
            id: Set(item.id),
            owner_id: Set(item.owner_id),
            status_text: Set(item.status_text),
            created_on: Set(item.created_on),
        }
    }
}
