//! Entity module for database models

pub mod health_history;
pub mod prelude;
pub mod tokens;
pub mod trades;
pub mod trees;
