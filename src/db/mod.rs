// Database Module
// This module handles database access for the ledger core

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DbError;
pub use pool::DbPool;
