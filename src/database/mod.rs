pub mod connection;
pub mod entities;
pub mod migrations;
pub mod test_utils;

pub use connection::{establish_connection, get_database_url, get_readonly_url};

use clap::Subcommand;
use sea_orm::DbErr;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use migrations::Migrator;

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum MigrateDirection {
    Up,
    Down,
}

/// Apply (or roll back) the schema on the given database file.
///
/// Running `Up` against an already-initialized database is a no-op for
/// existing tables and data; migrations are tracked.
pub async fn migrate_database(
    database_path: &str,
    direction: MigrateDirection,
) -> Result<(), DbErr> {
    let url = get_database_url(Some(database_path));
    let db = establish_connection(&url).await?;
    match direction {
        MigrateDirection::Up => Migrator::up(&db, None).await?,
        MigrateDirection::Down => Migrator::down(&db, None).await?,
    }
    info!("Database schema is up to date: {}", database_path);
    Ok(())
}
