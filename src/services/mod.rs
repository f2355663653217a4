// Service layer - business logic for the ledger core

pub mod portfolio_service;
pub mod token_service;
pub mod trade_service;
pub mod tree_service;
pub mod valuation;

pub use portfolio_service::PortfolioService;
pub use token_service::TokenService;
pub use trade_service::TradeService;
pub use tree_service::TreeService;
