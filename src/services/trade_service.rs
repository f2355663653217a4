// Trading ledger - append-only record of fractional buy/sell fills.
// Trade price is a simulated market signal; it never feeds back into
// token valuation, which moves only with tree health.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

use crate::db::repositories::{TokenRepository, TradeRepository};
use crate::db::DbError;
use crate::entity::{tokens, trades};
use crate::error::{LedgerError, LedgerResult};
use crate::models::TradeSide;

/// Service for recording and reading trade fills
pub struct TradeService {
    db: DatabaseConnection,
    tokens: TokenRepository,
    trades: TradeRepository,
}

impl TradeService {
    /// Create a new trade service instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            tokens: TokenRepository::new(db.clone()),
            trades: TradeRepository::new(db.clone()),
            db,
        }
    }

    /// Record a buy or sell fill against a token.
    ///
    /// The total is always computed here from quantity and price; a
    /// caller-supplied total is never accepted. Sells require the acting
    /// principal to be the token's owner; buys are open to any principal.
    pub async fn record_trade(
        &self,
        token_id: &str,
        acting_principal: i32,
        side: TradeSide,
        quantity: f64,
        price_per_unit: f64,
    ) -> LedgerResult<trades::Model> {
        if quantity <= 0.0 {
            return Err(LedgerError::InvalidArgument(format!(
                "Trade quantity must be positive, got {}",
                quantity
            )));
        }
        if price_per_unit < 0.0 {
            return Err(LedgerError::InvalidArgument(format!(
                "Price per unit must not be negative, got {}",
                price_per_unit
            )));
        }

        let txn = self.db.begin().await.map_err(DbError::from)?;

        let token = tokens::Entity::find()
            .filter(tokens::Column::TokenId.eq(token_id))
            .one(&txn)
            .await?
            .ok_or_else(|| LedgerError::NotFound(format!("Token {} not found", token_id)))?;

        if side == TradeSide::Sell && token.owner_id != acting_principal {
            return Err(LedgerError::Forbidden(format!(
                "Principal {} does not own token {} and cannot sell it",
                acting_principal, token_id
            )));
        }

        let total_value = quantity * price_per_unit;

        let trade = trades::ActiveModel {
            token_id: Set(token.id),
            user_id: Set(acting_principal),
            side: Set(side.as_str().to_string()),
            quantity: Set(quantity),
            price_per_unit: Set(price_per_unit),
            total_value: Set(total_value),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let trade = trade.insert(&txn).await?;

        txn.commit().await.map_err(DbError::from)?;

        tracing::info!(
            "Recorded {} fill for token {}: qty={}, price={}",
            side,
            token_id,
            quantity,
            price_per_unit
        );
        Ok(trade)
    }

    /// Get fills recorded against a token, most recent first
    pub async fn get_trades(
        &self,
        token_id: &str,
        limit: u64,
    ) -> LedgerResult<Vec<trades::Model>> {
        let token = self
            .tokens
            .find_by_token_id(token_id)
            .await?
            .ok_or_else(|| LedgerError::NotFound(format!("Token {} not found", token_id)))?;

        let trades = self.trades.find_by_token(token.id, limit).await?;
        Ok(trades)
    }
}
