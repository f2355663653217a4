// Database repository management

pub mod health_history_repository;
pub mod token_repository;
pub mod trade_repository;
pub mod tree_repository;

pub use health_history_repository::HealthHistoryRepository;
pub use token_repository::TokenRepository;
pub use trade_repository::TradeRepository;
pub use tree_repository::TreeRepository;

use sea_orm::DatabaseConnection;

/// Container for all database repositories
pub struct Repositories {
    pub trees: TreeRepository,
    pub health_history: HealthHistoryRepository,
    pub tokens: TokenRepository,
    pub trades: TradeRepository,
}

impl Repositories {
    /// Creates a new repositories container with database connection
    pub fn new(conn: DatabaseConnection) -> Self {
        Repositories {
            trees: TreeRepository::new(conn.clone()),
            health_history: HealthHistoryRepository::new(conn.clone()),
            tokens: TokenRepository::new(conn.clone()),
            trades: TradeRepository::new(conn),
        }
    }
}
