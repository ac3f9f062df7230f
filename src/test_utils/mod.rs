//! Fixtures shared by the unit tests and the API tests under `tests/`.
pub mod factory;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// A fresh, fully migrated in-memory database.
pub async fn init_db() -> Result<DbConn, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // Every pooled connection would otherwise open its own empty database.
    options.max_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}
