//! LaneMatch Algo - Ball recommendation service for the LaneMatch bowling app
//!
//! This library provides the match-scoring core used by the LaneMatch app:
//! every catalog ball is scored against a bowler's delivery specs and an oil
//! pattern, then ranked to produce the recommendation list.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, recommendation_reason, Recommender};
pub use crate::models::{
    Ball, BallRecommendation, BowlerSpecs, OilPattern, RecommendationsRequest,
    RecommendationsResponse,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let ball = Ball {
            id: 1,
            name: "Test".to_string(),
            brand: "Test".to_string(),
            coverstock: None,
            hook_potential: 4.0,
            length: 5.0,
            backend: None,
            surface: "2000".to_string(),
        };
        let specs = BowlerSpecs {
            rev_rate: 300.0,
            ball_speed: 17.0,
            axis_tilt: None,
            axis_rotation: None,
            pap_horizontal: None,
            pap_vertical: None,
        };
        let pattern = OilPattern {
            id: None,
            name: "House".to_string(),
            category: None,
            length: 39.0,
            volume: 22.0,
            ratio: None,
            forward_oil: None,
            description: None,
            difficulty: None,
        };

        let score = calculate_match_score(&ball, &specs, &pattern);
        assert!((0.0..=100.0).contains(&score));
    }
}
