// Repository for health observation queries

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::db::DbError;
use crate::entity::health_history;

#[derive(Clone)]
pub struct HealthHistoryRepository {
    conn: DatabaseConnection,
}

impl HealthHistoryRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get observations for a tree, most recent first.
    ///
    /// Ties on recorded_at (backfilled history) fall back to insertion order.
    pub async fn find_by_tree(
        &self,
        tree_id: i32,
        limit: u64,
    ) -> Result<Vec<health_history::Model>, DbError> {
        let results = health_history::Entity::find()
            .filter(health_history::Column::TreeId.eq(tree_id))
            .order_by_desc(health_history::Column::RecordedAt)
            .order_by_desc(health_history::Column::Id)
            .limit(limit)
            .all(&self.conn)
            .await?;
        Ok(results)
    }
}
