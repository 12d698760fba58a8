//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! user accounts, feed items, email normalization and password hashing.

pub mod account;
pub mod constants;
pub mod email;
pub mod error;
pub mod feed;
pub mod password;

pub use account::UserAccount;
pub use constants::*;
pub use email::{is_blank, normalize_email};
pub use error::{DomainError, DomainResult};
pub use feed::FeedItem;
pub use password::{Argon2Hasher, Password, PasswordHasher};

#[cfg(any(test, feature = "test-utils"))]
pub use password::MockPasswordHasher;
