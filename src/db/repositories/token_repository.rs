// Repository for token queries

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::db::DbError;
use crate::entity::tokens;

#[derive(Clone)]
pub struct TokenRepository {
    conn: DatabaseConnection,
}

impl TokenRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get a token by its globally unique token identifier
    pub async fn find_by_token_id(
        &self,
        token_id: &str,
    ) -> Result<Option<tokens::Model>, DbError> {
        let result = tokens::Entity::find()
            .filter(tokens::Column::TokenId.eq(token_id))
            .one(&self.conn)
            .await?;
        Ok(result)
    }

    /// Get the token minted for a tree, if any
    pub async fn find_by_tree_id(&self, tree_id: i32) -> Result<Option<tokens::Model>, DbError> {
        let result = tokens::Entity::find()
            .filter(tokens::Column::TreeId.eq(tree_id))
            .one(&self.conn)
            .await?;
        Ok(result)
    }

    /// Find all tokens owned by a principal in insertion order
    pub async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<tokens::Model>, DbError> {
        let results = tokens::Entity::find()
            .filter(tokens::Column::OwnerId.eq(owner_id))
            .order_by_asc(tokens::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(results)
    }

    /// Find tokens for a set of trees in one query
    pub async fn find_by_tree_ids(
        &self,
        tree_ids: Vec<i32>,
    ) -> Result<Vec<tokens::Model>, DbError> {
        if tree_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = tokens::Entity::find()
            .filter(tokens::Column::TreeId.is_in(tree_ids))
            .all(&self.conn)
            .await?;
        Ok(results)
    }
}
