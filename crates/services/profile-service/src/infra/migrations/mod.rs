//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_user_accounts_table;
mod m20240101_000002_create_feed_items_table;

pub struct Migrator;

/// `LENGTH(col) <= max`, for backends that ignore `VARCHAR(n)` (SQLite).
pub(crate) fn max_length<C: IntoColumnRef>(col: C, max: u32) -> SimpleExpr {
    Expr::expr(Func::cust(Alias::new("LENGTH")).arg(Expr::col(col))).lte(max)
}

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_user_accounts_table::Migration),
            Box::new(m20240101_000002_create_feed_items_table::Migration),
        ]
    }
}
