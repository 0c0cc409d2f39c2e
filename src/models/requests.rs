use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{BowlerSpecs, OilPattern};

/// Request for ball recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationsRequest {
    #[validate(nested)]
    #[serde(rename = "bowlerSpecs")]
    pub bowler_specs: BowlerSpecs,
    #[validate(nested)]
    #[serde(rename = "oilPattern")]
    pub oil_pattern: OilPattern,
}

/// Request to create a custom oil pattern
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePatternRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1.0))]
    pub length: f64,
    #[validate(range(min = 0.0))]
    pub volume: f64,
    #[serde(default)]
    pub ratio: Option<f64>,
    #[serde(default)]
    pub forward_oil: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// Request to add a ball to a user's arsenal
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddArsenalRequest {
    #[validate(range(min = 1))]
    pub ball_id: i32,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub current_surface: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<chrono::NaiveDate>,
}

/// Request to log one game
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogPerformanceRequest {
    #[validate(range(min = 1))]
    pub pattern_id: i32,
    #[serde(default)]
    pub ball_used_id: Option<i32>,
    #[validate(range(min = 0, max = 300))]
    pub score: i32,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub carry_percentage: Option<f64>,
    #[serde(default)]
    pub entry_angle: Option<f64>,
    pub game_date: chrono::NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Query string for pattern listing
#[derive(Debug, Clone, Deserialize)]
pub struct PatternsQuery {
    #[serde(default)]
    pub category: Option<String>,
}

/// Query string for performance stats
#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceQuery {
    #[serde(default)]
    pub timeframe: Option<String>,
}
