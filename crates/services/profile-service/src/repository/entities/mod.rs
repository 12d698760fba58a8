//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod feed_item;
pub mod user_account;
