// Shared test environment: an in-memory SQLite store with the full schema
// applied through the migration crate.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

/// Connect to a fresh in-memory database and apply all migrations.
///
/// A single pooled connection keeps the in-memory database alive for the
/// duration of the test.
pub async fn setup_db() -> DatabaseConnection {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("connect to in-memory sqlite");

    Migrator::up(&db, None).await.expect("apply migrations");

    db
}
