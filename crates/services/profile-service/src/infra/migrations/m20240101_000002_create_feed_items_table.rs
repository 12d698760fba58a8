//! Migration: Create feed_items table owned by user_accounts.

use domain::MAX_STATUS_TEXT_LENGTH;
use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_user_accounts_table::UserAccounts;
use super::max_length;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeedItems::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(FeedItems::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(FeedItems::OwnerId).uuid().not_null())
                    .col(
                        ColumnDef::new(FeedItems::StatusText)
                            .string_len(MAX_STATUS_TEXT_LENGTH)
                            .not_null()
                            .check(max_length(FeedItems::StatusText, MAX_STATUS_TEXT_LENGTH)),
                    )
                    .col(
                        ColumnDef::new(FeedItems::CreatedOn)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    // Removing an account removes its feed
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feed_items_owner_id")
                            .from(FeedItems::Table, FeedItems::OwnerId)
                            .to(UserAccounts::Table, UserAccounts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_feed_items_owner_id")
                    .table(FeedItems::Table)
                    .col(FeedItems::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeedItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FeedItems {
    Table,
    Id,
    OwnerId,
    StatusText,
    CreatedOn,
}
