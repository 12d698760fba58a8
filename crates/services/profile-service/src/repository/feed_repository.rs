//! Feed storage capability and its SeaORM implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::entities::feed_item::{self, ActiveModel, Entity as FeedItemEntity};
use common::{AppError, AppResult};
use domain::FeedItem;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Feed storage capability.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FeedStore: Send + Sync {
    /// Persist a new feed item; fails if the owner does not exist
    async fn create(&self, item: FeedItem) -> AppResult<FeedItem>;

    /// List an owner's feed items, newest first
    async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<FeedItem>>;
}

/// SeaORM implementation of FeedStore
pub struct SeaFeedStore {
    db: DatabaseConnection,
}

impl SeaFeedStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FeedStore for SeaFeedStore {
    async fn create(&self, item: FeedItem) -> AppResult<FeedItem> {
        let model = ActiveModel::from(item)
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(FeedItem::from(model))
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<FeedItem>> {
        let models = FeedItemEntity::find()
            .filter(feed_item::Column::OwnerId.eq(owner_id))
            .order_by_desc(feed_item::Column::CreatedOn)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(FeedItem::from).collect())
    }
}
