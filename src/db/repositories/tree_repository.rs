use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::db::DbError;
use crate::entity::trees::{Column, Entity as Tree, Model};

/// Repository for tree read operations
#[derive(Clone)]
pub struct TreeRepository {
    db: DatabaseConnection,
}

impl TreeRepository {
    /// Create a new tree repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Find tree by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Model>, DbError> {
        let tree = Tree::find_by_id(id).one(&self.db).await?;
        Ok(tree)
    }

    /// Find all trees for an owner in insertion order
    pub async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Model>, DbError> {
        let trees = Tree::find()
            .filter(Column::OwnerId.eq(owner_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;
        Ok(trees)
    }
}
