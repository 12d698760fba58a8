//! Service layer - account and feed use cases.

mod account_service;
mod feed_service;

pub use account_service::{AccountService, UserAccountFactory};
pub use feed_service::{FeedManager, FeedService};
