// Asset registry - owns tree records, the append-only health ledger, and
// keeps the derived valuation consistent across tree and token rows.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
    TransactionTrait,
};

use crate::db::repositories::{HealthHistoryRepository, TreeRepository};
use crate::db::DbError;
use crate::entity::{health_history, tokens, trees};
use crate::error::{LedgerError, LedgerResult};
use crate::models::TreeSpecies;
use crate::services::valuation::{token_value, BASE_ASSET_VALUE};

/// Event tag reserved for the observation written at planting time
pub const PLANTING_EVENT: &str = "planting";

/// Service for tree registry operations
pub struct TreeService {
    db: DatabaseConnection,
    trees: TreeRepository,
    health_history: HealthHistoryRepository,
}

impl TreeService {
    /// Create a new tree service instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            trees: TreeRepository::new(db.clone()),
            health_history: HealthHistoryRepository::new(db.clone()),
            db,
        }
    }

    /// Plant a new tree.
    ///
    /// Inserts the tree row and its planting observation as one transaction;
    /// neither is ever visible without the other. The nickname check runs
    /// inside the same transaction so concurrent creates by one owner fail
    /// deterministically with `DuplicateNickname`.
    pub async fn create_tree(
        &self,
        owner_id: i32,
        species: TreeSpecies,
        latitude: f64,
        longitude: f64,
        nickname: Option<String>,
        location_name: Option<String>,
        description: Option<String>,
    ) -> LedgerResult<trees::Model> {
        let nickname = nickname.filter(|n| !n.is_empty());

        let txn = self.db.begin().await.map_err(DbError::from)?;

        if let Some(nick) = &nickname {
            let existing = trees::Entity::find()
                .filter(trees::Column::OwnerId.eq(owner_id))
                .filter(trees::Column::Nickname.eq(nick.as_str()))
                .one(&txn)
                .await?;

            if existing.is_some() {
                return Err(LedgerError::DuplicateNickname(format!(
                    "A tree named '{}' already exists for this owner",
                    nick
                )));
            }
        }

        let now = Utc::now();
        let tree = trees::ActiveModel {
            owner_id: Set(owner_id),
            species: Set(species.as_str().to_string()),
            latitude: Set(latitude),
            longitude: Set(longitude),
            location_name: Set(location_name),
            nickname: Set(nickname),
            description: Set(description),
            health_score: Set(100.0),
            current_value: Set(BASE_ASSET_VALUE),
            is_public: Set(true),
            planting_date: Set(now),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let tree = match tree.insert(&txn).await {
            Ok(tree) => tree,
            // A concurrent create can slip past the check above; the
            // (owner_id, nickname) index settles that race
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(msg)) if msg.contains("nickname") => {
                    return Err(LedgerError::DuplicateNickname(
                        "A tree with this nickname already exists for this owner".to_string(),
                    ));
                }
                _ => return Err(err.into()),
            },
        };

        let observation = health_history::ActiveModel {
            tree_id: Set(tree.id),
            health_score: Set(tree.health_score),
            token_value: Set(tree.current_value),
            event_type: Set(Some(PLANTING_EVENT.to_string())),
            description: Set(Some("Tree planted".to_string())),
            recorded_at: Set(now),
            ..Default::default()
        };
        observation.insert(&txn).await?;

        txn.commit().await.map_err(DbError::from)?;

        tracing::info!("Created tree {} for owner {}", tree.id, owner_id);
        Ok(tree)
    }

    /// Get tree details by ID
    pub async fn get_tree(&self, tree_id: i32) -> LedgerResult<trees::Model> {
        self.trees
            .find_by_id(tree_id)
            .await?
            .ok_or_else(|| LedgerError::NotFound(format!("Tree {} not found", tree_id)))
    }

    /// List all trees for an owner in insertion order
    pub async fn list_trees(&self, owner_id: i32) -> LedgerResult<Vec<trees::Model>> {
        let trees = self.trees.find_by_owner(owner_id).await?;
        Ok(trees)
    }

    /// List an owner's trees with pagination applied over the full read
    pub async fn list_trees_paginated(
        &self,
        owner_id: i32,
        limit: usize,
        offset: usize,
    ) -> LedgerResult<Vec<trees::Model>> {
        let trees = self.trees.find_by_owner(owner_id).await?;
        Ok(trees.into_iter().skip(offset).take(limit).collect())
    }

    /// Update a tree's health score.
    ///
    /// Recomputes the derived value, appends a health observation, and syncs
    /// the token's current value when one exists, all in one transaction.
    /// Scores outside [0, 100] are persisted verbatim and the value
    /// extrapolates linearly.
    pub async fn update_health(
        &self,
        tree_id: i32,
        health_score: f64,
        event_type: Option<String>,
        description: Option<String>,
    ) -> LedgerResult<trees::Model> {
        let txn = self.db.begin().await.map_err(DbError::from)?;

        let tree = trees::Entity::find_by_id(tree_id)
            .one(&txn)
            .await?
            .ok_or_else(|| LedgerError::NotFound(format!("Tree {} not found", tree_id)))?;

        let derived_value = token_value(health_score, BASE_ASSET_VALUE);
        let now = Utc::now();

        let mut tree: trees::ActiveModel = tree.into();
        tree.health_score = Set(health_score);
        tree.current_value = Set(derived_value);
        tree.updated_at = Set(now);
        let tree = tree.update(&txn).await?;

        let observation = health_history::ActiveModel {
            tree_id: Set(tree_id),
            health_score: Set(health_score),
            token_value: Set(derived_value),
            event_type: Set(event_type),
            description: Set(description),
            recorded_at: Set(now),
            ..Default::default()
        };
        observation.insert(&txn).await?;

        if let Some(token) = tokens::Entity::find()
            .filter(tokens::Column::TreeId.eq(tree_id))
            .one(&txn)
            .await?
        {
            let mut token: tokens::ActiveModel = token.into();
            token.current_value = Set(derived_value);
            token.updated_at = Set(now);
            token.update(&txn).await?;
        }

        txn.commit().await.map_err(DbError::from)?;

        tracing::info!(
            "Updated health for tree {}: score={}, value={}",
            tree_id,
            health_score,
            derived_value
        );
        Ok(tree)
    }

    /// Get health history for a tree, most recent first
    pub async fn get_health_history(
        &self,
        tree_id: i32,
        limit: u64,
    ) -> LedgerResult<Vec<health_history::Model>> {
        // Distinguish "no observations" from "no such tree"
        self.get_tree(tree_id).await?;

        let history = self.health_history.find_by_tree(tree_id, limit).await?;
        Ok(history)
    }
}
