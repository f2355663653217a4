// Repository for trade ledger queries

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::db::DbError;
use crate::entity::trades;

#[derive(Clone)]
pub struct TradeRepository {
    conn: DatabaseConnection,
}

impl TradeRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get fills recorded against a token, most recent first
    pub async fn find_by_token(
        &self,
        token_id: i32,
        limit: u64,
    ) -> Result<Vec<trades::Model>, DbError> {
        let results = trades::Entity::find()
            .filter(trades::Column::TokenId.eq(token_id))
            .order_by_desc(trades::Column::CreatedAt)
            .order_by_desc(trades::Column::Id)
            .limit(limit)
            .all(&self.conn)
            .await?;
        Ok(results)
    }
}
