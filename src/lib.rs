//! Grove Ledger
//!
//! Valuation and trading ledger for physical trees tokenized as
//! one-per-asset NFTs. Tracks an append-only health history per tree,
//! derives tree and token values from health, mints at most one token per
//! tree, and records fractional buy/sell fills against tokens.
//!
//! The crate exposes plain service operations over a transactional
//! relational store; authentication, HTTP transport, and media generation
//! live outside and hand in resolved principal ids and opaque URIs.

pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod models;
pub mod services;

pub use config::LedgerConfig;
pub use db::DbPool;
pub use error::{LedgerError, LedgerResult};
pub use models::{PortfolioItem, PortfolioSummary, TradeSide, TreeSpecies};
pub use services::{PortfolioService, TokenService, TradeService, TreeService};
