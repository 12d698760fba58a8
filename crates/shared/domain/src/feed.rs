//! Feed item domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A timestamped status message owned by a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub status_text: String,
    /// Set once at creation
    pub created_on: DateTime<Utc>,
}

impl FeedItem {
    /// Create a new feed item stamped with the current time
    pub fn new(owner_id: Uuid, status_text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            status_text,
            created_on: Utc::now(),
        }
    }
}

impl std::fmt::Display for FeedItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.status_text)
    }
}
