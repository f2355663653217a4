// Domain types and read models shared across services

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entity::{tokens, trees};

/// Fixed enumeration of supported tree species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeSpecies {
    Oak,
    Pine,
    Birch,
    Maple,
    Elm,
    Spruce,
}

impl TreeSpecies {
    pub fn as_str(&self) -> &'static str {
        match self {
            TreeSpecies::Oak => "oak",
            TreeSpecies::Pine => "pine",
            TreeSpecies::Birch => "birch",
            TreeSpecies::Maple => "maple",
            TreeSpecies::Elm => "elm",
            TreeSpecies::Spruce => "spruce",
        }
    }
}

impl fmt::Display for TreeSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TreeSpecies {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oak" => Ok(TreeSpecies::Oak),
            "pine" => Ok(TreeSpecies::Pine),
            "birch" => Ok(TreeSpecies::Birch),
            "maple" => Ok(TreeSpecies::Maple),
            "elm" => Ok(TreeSpecies::Elm),
            "spruce" => Ok(TreeSpecies::Spruce),
            other => Err(format!("Unknown tree species: {}", other)),
        }
    }
}

/// Side of a recorded fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(TradeSide::Buy),
            "sell" => Ok(TradeSide::Sell),
            other => Err(format!("trade side must be 'buy' or 'sell', got '{}'", other)),
        }
    }
}

/// One tree with its token (or explicit absence) in a portfolio view
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioItem {
    pub tree: trees::Model,
    pub token: Option<tokens::Model>,
    pub health_score: f64,
    pub current_value: f64,
}

/// Full portfolio projection for one owner, recomputed on every read
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub owner_id: i32,
    pub total_trees: usize,
    pub total_value: f64,
    pub items: Vec<PortfolioItem>,
}
