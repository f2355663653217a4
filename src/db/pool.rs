// Database connection pooling management

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

use crate::config::LedgerConfig;
use crate::db::error::DbError;
use crate::db::repositories::Repositories;

/// Database connection pool for managing Sea-ORM connections
pub struct DbPool {
    pool: DatabaseConnection,
}

impl DbPool {
    /// Creates a new database connection pool from ledger configuration
    pub async fn new(config: &LedgerConfig) -> Result<Self, DbError> {
        let max_connections: u32 = std::env::var("DB_POOL_MAX")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);
        let min_connections: u32 = std::env::var("DB_POOL_MIN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2);
        // How long to wait for a free connection before giving up
        let acquire_timeout_secs: u64 = 8;
        let idle_timeout_secs: u64 = 300;
        let connect_timeout_secs: u64 = 10;
        let debug_mode = false;

        let conn_opts = ConnectOptions::new(config.database_url.clone())
            .max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .idle_timeout(Duration::from_secs(idle_timeout_secs))
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .sqlx_logging(debug_mode)
            .to_owned();

        Database::connect(conn_opts)
            .await
            .map(|pool| DbPool { pool })
            .map_err(|e| DbError::ConnectionError(e.to_string()))
    }

    /// Returns a reference to the underlying database connection
    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.pool
    }

    /// Creates repository instances for database operations
    pub fn repositories(&self) -> Repositories {
        Repositories::new(self.pool.clone())
    }
}
