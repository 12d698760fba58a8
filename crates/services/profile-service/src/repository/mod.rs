//! Repository layer for data access.
//!
//! `AccountStore` and `FeedStore` are the storage capabilities the services
//! are composed with; the `Sea*` types implement them on SeaORM.

pub mod entities;
mod account_repository;
mod feed_repository;

pub use account_repository::{AccountStore, SeaAccountStore};
pub use feed_repository::{FeedStore, SeaFeedStore};

#[cfg(any(test, feature = "test-utils"))]
pub use account_repository::MockAccountStore;
#[cfg(any(test, feature = "test-utils"))]
pub use feed_repository::MockFeedStore;
