//! Migration: Create user_accounts table.

use domain::{MAX_EMAIL_LENGTH, MAX_NAME_LENGTH};
use sea_orm_migration::prelude::*;

use super::max_length;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAccounts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserAccounts::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(UserAccounts::Email)
                            .string_len(MAX_EMAIL_LENGTH)
                            .not_null()
                            .unique_key()
                            .check(max_length(UserAccounts::Email, MAX_EMAIL_LENGTH)),
                    )
                    .col(
                        ColumnDef::new(UserAccounts::Name)
                            .string_len(MAX_NAME_LENGTH)
                            .not_null()
                            .check(max_length(UserAccounts::Name, MAX_NAME_LENGTH)),
                    )
                    .col(ColumnDef::new(UserAccounts::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(UserAccounts::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(UserAccounts::IsStaff)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserAccounts::IsSuperuser)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAccounts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(super) enum UserAccounts {
    Table,
    Id,
    Email,
    Name,
    PasswordHash,
    IsActive,
    IsStaff,
    IsSuperuser,
}
