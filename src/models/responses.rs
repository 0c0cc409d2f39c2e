use serde::{Deserialize, Serialize};

use crate::models::domain::{BallRecommendation, PerformanceStats, RecentGame};

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<BallRecommendation>,
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Aggregated stats plus the most recent games
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceStatsResponse {
    #[serde(flatten)]
    pub stats: PerformanceStats,
    #[serde(rename = "recentGames")]
    pub recent_games: Vec<RecentGame>,
}
