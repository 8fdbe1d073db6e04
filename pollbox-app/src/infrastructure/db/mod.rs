pub mod entities;
mod poll_repository;
mod vote_repository;

pub use poll_repository::PollRepository;
pub use vote_repository::VoteRepository;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::time::Duration;

pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .sqlx_logging(false);

    Database::connect(opt).await
}

/// Applies the embedded schema at startup. Statements are idempotent
/// (`CREATE TABLE IF NOT EXISTS`), so re-running on boot is harmless.
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let migration = include_str!("../../../../migrations/001_initial.sql");

    for statement in migration.split(';').map(str::trim) {
        if statement.is_empty() {
            continue;
        }
        db.execute(Statement::from_string(
            sea_orm::DatabaseBackend::Postgres,
            statement.to_string(),
        ))
        .await?;
    }

    Ok(())
}
