use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Grit assumed when a ball's surface string carries no number
pub const DEFAULT_SURFACE_GRIT: u32 = 1500;

/// A catalog ball with the coverstock attributes scoring reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: i32,
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub coverstock: Option<String>,
    pub hook_potential: f64,
    pub length: f64,
    #[serde(default)]
    pub backend: Option<f64>,
    pub surface: String,
}

impl Ball {
    /// Numeric grit of the surface string
    ///
    /// Grit values arrive as strings like "2000" or "4000 polished"; the
    /// leading integer is taken and anything unparsable falls back to
    /// [`DEFAULT_SURFACE_GRIT`].
    pub fn surface_grit(&self) -> u32 {
        let digits: String = self
            .surface
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();

        digits.parse().unwrap_or(DEFAULT_SURFACE_GRIT)
    }
}

/// A bowler's physical delivery measurements
///
/// Only `rev_rate` and `ball_speed` feed the scoring formulas; the axis and
/// PAP measurements are stored at registration for drilling layouts.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BowlerSpecs {
    #[validate(range(min = 0.0, max = 1000.0))]
    pub rev_rate: f64,
    #[validate(range(min = 0.0, max = 40.0))]
    pub ball_speed: f64,
    #[serde(default)]
    pub axis_tilt: Option<f64>,
    #[serde(default)]
    pub axis_rotation: Option<f64>,
    #[serde(default)]
    pub pap_horizontal: Option<f64>,
    #[serde(default)]
    pub pap_vertical: Option<f64>,
}

/// A lane oil pattern
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OilPattern {
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Applied length in feet
    #[validate(range(min = 1.0))]
    pub length: f64,
    /// Total oil volume in mL
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

/// A scored catalog ball, as returned by the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallRecommendation {
    #[serde(flatten)]
    pub ball: Ball,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "recommendationReason")]
    pub recommendation_reason: String,
}

/// A ball owned by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArsenalEntry {
    pub id: i32,
    pub user_id: i32,
    pub ball_id: i32,
    pub layout: Option<String>,
    pub current_surface: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// An arsenal entry joined with its catalog ball attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArsenalBall {
    pub id: i32,
    pub user_id: i32,
    pub ball_id: i32,
    pub layout: Option<String>,
    pub current_surface: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub ball_name: String,
    pub brand: String,
    pub hook_potential: f64,
    pub length: f64,
    pub backend: Option<f64>,
}

/// One logged game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceLog {
    pub id: i32,
    pub user_id: i32,
    pub pattern_id: i32,
    pub ball_used_id: Option<i32>,
    pub score: i32,
    pub carry_percentage: Option<f64>,
    pub entry_angle: Option<f64>,
    pub game_date: NaiveDate,
    pub notes: Option<String>,
}

/// Aggregates over a stats window; averages are NULL until a game is logged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceStats {
    pub average_score: Option<f64>,
    pub carry_percentage: Option<f64>,
    pub entry_angle: Option<f64>,
    pub games_played: i64,
}

/// A recent game with pattern and ball names resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentGame {
    pub id: i32,
    pub pattern_id: i32,
    pub ball_used_id: Option<i32>,
    pub score: i32,
    pub carry_percentage: Option<f64>,
    pub entry_angle: Option<f64>,
    pub game_date: NaiveDate,
    pub notes: Option<String>,
    pub pattern_name: Option<String>,
    pub ball_name: Option<String>,
}

/// Weekly rollup for trend charts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub week: NaiveDate,
    pub avg_score: Option<f64>,
    pub avg_carry: Option<f64>,
    pub games: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_with_surface(surface: &str) -> Ball {
        Ball {
            id: 1,
            name: "Test Ball".to_string(),
            brand: "Test".to_string(),
            coverstock: None,
            hook_potential: 4.0,
            length: 5.0,
            backend: None,
            surface: surface.to_string(),
        }
    }

    #[test]
    fn test_surface_grit_plain_number() {
        assert_eq!(ball_with_surface("2000").surface_grit(), 2000);
    }

    #[test]
    fn test_surface_grit_trailing_text() {
        assert_eq!(ball_with_surface("4000 polished").surface_grit(), 4000);
        assert_eq!(ball_with_surface("  500 Abralon").surface_grit(), 500);
    }

    #[test]
    fn test_surface_grit_unparsable_defaults() {
        assert_eq!(ball_with_surface("N/A").surface_grit(), DEFAULT_SURFACE_GRIT);
        assert_eq!(ball_with_surface("").surface_grit(), DEFAULT_SURFACE_GRIT);
        assert_eq!(ball_with_surface("polished").surface_grit(), DEFAULT_SURFACE_GRIT);
    }
}
