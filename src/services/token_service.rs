// Tokenization service - mints at most one token per tree and resolves
// token lookups. Token values are written here once; afterwards they only
// move when tree health does.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
    TransactionTrait,
};
use uuid::Uuid;

use crate::db::repositories::TokenRepository;
use crate::db::DbError;
use crate::entity::{tokens, trees};
use crate::error::{LedgerError, LedgerResult};

/// Default base value assigned to a freshly minted token
pub const DEFAULT_BASE_VALUE: f64 = 100.0;

/// Service for token minting and lookups
pub struct TokenService {
    db: DatabaseConnection,
    tokens: TokenRepository,
}

impl TokenService {
    /// Create a new token service instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            tokens: TokenRepository::new(db.clone()),
            db,
        }
    }

    /// Mint a token for a tree.
    ///
    /// Preconditions in order: the tree exists, the minting principal owns
    /// it, and no token references it yet. Two concurrent mints race on the
    /// unique index over tokens.tree_id, so the losing insert still surfaces
    /// `AlreadyMinted` rather than a duplicate row. A collision on the
    /// generated identifier surfaces as a storage error the caller may retry.
    pub async fn mint(
        &self,
        tree_id: i32,
        minting_principal: i32,
        image_uri: &str,
        metadata_uri: &str,
        base_value: f64,
    ) -> LedgerResult<tokens::Model> {
        let txn = self.db.begin().await.map_err(DbError::from)?;

        let tree = trees::Entity::find_by_id(tree_id)
            .one(&txn)
            .await?
            .ok_or_else(|| LedgerError::NotFound(format!("Tree {} not found", tree_id)))?;

        if tree.owner_id != minting_principal {
            return Err(LedgerError::Forbidden(format!(
                "Principal {} does not own tree {}",
                minting_principal, tree_id
            )));
        }

        let existing = tokens::Entity::find()
            .filter(tokens::Column::TreeId.eq(tree_id))
            .one(&txn)
            .await?;
        if existing.is_some() {
            return Err(LedgerError::AlreadyMinted(format!(
                "Token already minted for tree {}",
                tree_id
            )));
        }

        let token_id = generate_token_id(tree_id);
        let now = Utc::now();
        let token = tokens::ActiveModel {
            token_id: Set(token_id.clone()),
            tree_id: Set(tree_id),
            owner_id: Set(minting_principal),
            image_uri: Set(image_uri.to_string()),
            metadata_uri: Set(metadata_uri.to_string()),
            base_value: Set(base_value),
            current_value: Set(base_value),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let token = match token.insert(&txn).await {
            Ok(token) => token,
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(msg)) if msg.contains("tree_id") => {
                    return Err(LedgerError::AlreadyMinted(format!(
                        "Token already minted for tree {}",
                        tree_id
                    )));
                }
                // Identifier collision or anything else: opaque and retryable
                _ => return Err(err.into()),
            },
        };

        txn.commit().await.map_err(DbError::from)?;

        tracing::info!("Minted token {} for tree {}", token_id, tree_id);
        Ok(token)
    }

    /// Get a token by its globally unique identifier
    pub async fn get_token(&self, token_id: &str) -> LedgerResult<tokens::Model> {
        self.tokens
            .find_by_token_id(token_id)
            .await?
            .ok_or_else(|| LedgerError::NotFound(format!("Token {} not found", token_id)))
    }

    /// Get the token minted for a tree
    pub async fn get_token_by_tree(&self, tree_id: i32) -> LedgerResult<tokens::Model> {
        self.tokens
            .find_by_tree_id(tree_id)
            .await?
            .ok_or_else(|| LedgerError::NotFound(format!("No token minted for tree {}", tree_id)))
    }

    /// List all tokens owned by a principal
    pub async fn list_tokens(&self, owner_id: i32) -> LedgerResult<Vec<tokens::Model>> {
        let tokens = self.tokens.find_by_owner(owner_id).await?;
        Ok(tokens)
    }

    /// List an owner's tokens with pagination applied over the full read
    pub async fn list_tokens_paginated(
        &self,
        owner_id: i32,
        limit: usize,
        offset: usize,
    ) -> LedgerResult<Vec<tokens::Model>> {
        let tokens = self.tokens.find_by_owner(owner_id).await?;
        Ok(tokens.into_iter().skip(offset).take(limit).collect())
    }
}

/// Build a token identifier from the tree id plus random hex
fn generate_token_id(tree_id: i32) -> String {
    let entropy = Uuid::new_v4().simple().to_string();
    format!("TREE-{}-{}", tree_id, entropy[..8].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_id_carries_tree_id_and_entropy() {
        let token_id = generate_token_id(42);
        assert!(token_id.starts_with("TREE-42-"));

        let suffix = token_id.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn token_ids_are_distinct() {
        assert_ne!(generate_token_id(1), generate_token_id(1));
    }
}
