//! Feed service - Posts and lists status updates.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use common::AppResult;
use domain::FeedItem;

use crate::repository::FeedStore;

/// Feed service trait for dependency injection.
#[async_trait]
pub trait FeedService: Send + Sync {
    /// Post a status update on behalf of an account
    async fn post_status(&self, owner_id: Uuid, status_text: &str) -> AppResult<FeedItem>;

    /// List an account's status updates, newest first
    async fn list_for_owner(&self, owner_id: Uuid) -> AppResult<Vec<FeedItem>>;
}

/// Concrete implementation of FeedService using a feed store.
pub struct FeedManager {
    store: Arc<dyn FeedStore>,
}

impl FeedManager {
    pub fn new(store: Arc<dyn FeedStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FeedService for FeedManager {
    async fn post_status(&self, owner_id: Uuid, status_text: &str) -> AppResult<FeedItem> {
        // Owner existence and text length are checked by storage
        let item = self
            .store
            .create(FeedItem::new(owner_id, status_text.to_string()))
            .await?;

        info!(feed_item_id = %item.id, owner_id = %owner_id, "Status posted");
        Ok(item)
    }

    async fn list_for_owner(&self, owner_id: Uuid) -> AppResult<Vec<FeedItem>> {
        self.store.list_by_owner(owner_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use mockall::predicate::eq;

    use crate::repository::MockFeedStore;

    #[tokio::test]
    async fn test_post_status_stamps_new_item() {
        let owner_id = Uuid::new_v4();
        let mut store = MockFeedStore::new();
        store
            .expect_create()
            .times(1)
            .withf(move |item| item.owner_id == owner_id && item.status_text == "Hello")
            .returning(|item| Ok(item));

        let service = FeedManager::new(Arc::new(store));
        let item = service.post_status(owner_id, "Hello").await.unwrap();

        assert_eq!(item.to_string(), "Hello");
        assert_eq!(item.owner_id, owner_id);
    }

    #[tokio::test]
    async fn test_post_status_propagates_store_errors() {
        let mut store = MockFeedStore::new();
        store.expect_create().returning(|_| Err(AppError::NotFound));

        let service = FeedManager::new(Arc::new(store));
        let result = service.post_status(Uuid::new_v4(), "Hello").await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_for_owner() {
        let owner_id = Uuid::new_v4();
        let mut store = MockFeedStore::new();
        store
            .expect_list_by_owner()
            .with(eq(owner_id))
            .returning(|owner_id| {
                Ok(vec![
                    FeedItem::new(owner_id, "second".to_string()),
                    FeedItem::new(owner_id, "first".to_string()),
                ])
            });

        let service = FeedManager::new(Arc::new(store));
        let items = service.list_for_owner(owner_id).await.unwrap();

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.owner_id == owner_id));
    }
}
