//! SeaORM Entity for the append-only health_history table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "health_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tree_id: i32,
    pub health_score: f64,
    pub token_value: f64,
    #[sea_orm(nullable)]
    pub event_type: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub recorded_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
