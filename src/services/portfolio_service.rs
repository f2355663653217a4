// Portfolio aggregator - read-only projection over trees and tokens.
// Recomputed from live rows on every call; nothing here is cached.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::db::repositories::{TokenRepository, TreeRepository};
use crate::error::LedgerResult;
use crate::models::{PortfolioItem, PortfolioSummary};

/// Service for portfolio projections
pub struct PortfolioService {
    trees: TreeRepository,
    tokens: TokenRepository,
}

impl PortfolioService {
    /// Create a new portfolio service instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            trees: TreeRepository::new(db.clone()),
            tokens: TokenRepository::new(db),
        }
    }

    /// Build the portfolio for an owner.
    ///
    /// Total value sums tree values only; token values are informational
    /// per item and already mirror the tree valuation.
    pub async fn get_portfolio(&self, owner_id: i32) -> LedgerResult<PortfolioSummary> {
        let trees = self.trees.find_by_owner(owner_id).await?;

        let tree_ids: Vec<i32> = trees.iter().map(|t| t.id).collect();
        let mut tokens_by_tree: HashMap<i32, _> = self
            .tokens
            .find_by_tree_ids(tree_ids)
            .await?
            .into_iter()
            .map(|token| (token.tree_id, token))
            .collect();

        let mut items = Vec::with_capacity(trees.len());
        let mut total_value = 0.0;

        for tree in trees {
            total_value += tree.current_value;
            let token = tokens_by_tree.remove(&tree.id);
            items.push(PortfolioItem {
                health_score: tree.health_score,
                current_value: tree.current_value,
                token,
                tree,
            });
        }

        Ok(PortfolioSummary {
            owner_id,
            total_trees: items.len(),
            total_value,
            items,
        })
    }
}
