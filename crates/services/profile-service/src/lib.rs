//! Profile Service Library
//!
//! User accounts that log in by email, and the status feed they own.
//! Persistence is SeaORM; password hashing is Argon2.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::{DatabaseConnection, DbErr};
use tracing::info;

use common::DatabaseConfig;
use domain::{Argon2Hasher, PasswordHasher};

use crate::infra::Database;
use crate::repository::{SeaAccountStore, SeaFeedStore};
use crate::service::{AccountService, FeedManager, FeedService, UserAccountFactory};

/// Wired account and feed services sharing one connection.
#[derive(Clone)]
pub struct Profiles {
    pub accounts: Arc<dyn AccountService>,
    pub feed: Arc<dyn FeedService>,
}

impl Profiles {
    /// Connect, apply pending migrations and wire the services.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = Database::connect(config).await?;
        Ok(Self::from_connection(db.get_connection()))
    }

    /// Wire the services on an existing connection with the Argon2 hasher.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self::with_hasher(db, Arc::new(Argon2Hasher::new()))
    }

    pub fn with_hasher(db: DatabaseConnection, hasher: Arc<dyn PasswordHasher>) -> Self {
        let account_store = Arc::new(SeaAccountStore::new(db.clone()));
        let feed_store = Arc::new(SeaFeedStore::new(db));

        Self {
            accounts: Arc::new(UserAccountFactory::new(account_store, hasher)),
            feed: Arc::new(FeedManager::new(feed_store)),
        }
    }
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &DatabaseConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(config).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}
