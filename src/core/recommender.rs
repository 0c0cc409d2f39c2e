use crate::core::scoring::{calculate_match_score, recommendation_reason};
use crate::models::{Ball, BallRecommendation, BowlerSpecs, OilPattern};

/// How many recommendations to keep when no cap is configured
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Result of ranking a catalog against one bowler/pattern pair
#[derive(Debug)]
pub struct RecommendationResult {
    pub recommendations: Vec<BallRecommendation>,
    pub total_candidates: usize,
}

/// Ranking orchestrator over the ball catalog
///
/// # Pipeline
/// 1. Score every catalog ball against the bowler/pattern pair
/// 2. Stable sort descending by score (equal scores keep catalog order)
/// 3. Truncate to the configured result cap
/// 4. Attach display reasons to the survivors
#[derive(Debug, Clone)]
pub struct Recommender {
    max_results: usize,
}

impl Recommender {
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }

    pub fn with_default_limit() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Rank a catalog snapshot for a bowler on a pattern
    ///
    /// The snapshot is read-only; each invocation is independent, so callers
    /// may run this concurrently across requests without coordination.
    pub fn recommend(
        &self,
        specs: &BowlerSpecs,
        pattern: &OilPattern,
        catalog: &[Ball],
    ) -> RecommendationResult {
        let total_candidates = catalog.len();

        let mut scored: Vec<(f64, &Ball)> = catalog
            .iter()
            .map(|ball| (calculate_match_score(ball, specs, pattern), ball))
            .collect();

        // sort_by is stable: balls with equal scores stay in catalog order
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(self.max_results);

        let recommendations = scored
            .into_iter()
            .map(|(score, ball)| BallRecommendation {
                ball: ball.clone(),
                match_score: score,
                recommendation_reason: recommendation_reason(ball, pattern, score),
            })
            .collect();

        RecommendationResult {
            recommendations,
            total_candidates,
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_limit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_ball(id: i32, hook_potential: f64, length: f64, surface: &str) -> Ball {
        Ball {
            id,
            name: format!("Ball {}", id),
            brand: "Test Brand".to_string(),
            coverstock: None,
            hook_potential,
            length,
            backend: None,
            surface: surface.to_string(),
        }
    }

    fn create_specs() -> BowlerSpecs {
        BowlerSpecs {
            rev_rate: 400.0,
            ball_speed: 16.0,
            axis_tilt: None,
            axis_rotation: None,
            pap_horizontal: None,
            pap_vertical: None,
        }
    }

    fn create_pattern() -> OilPattern {
        OilPattern {
            id: None,
            name: "House".to_string(),
            category: None,
            length: 39.0,
            volume: 20.0,
            ratio: None,
            forward_oil: None,
            description: None,
            difficulty: None,
        }
    }

    #[test]
    fn test_recommendations_sorted_descending() {
        let recommender = Recommender::with_default_limit();
        let catalog = vec![
            create_ball(1, 1.0, 2.0, "4000"),
            create_ball(2, 3.25, 7.0, "1500"),
            create_ball(3, 2.0, 4.0, "2000"),
        ];

        let result = recommender.recommend(&create_specs(), &create_pattern(), &catalog);

        assert_eq!(result.total_candidates, 3);
        for pair in result.recommendations.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn test_equal_scores_keep_catalog_order() {
        let recommender = Recommender::with_default_limit();
        // Two identical balls score identically; a weak third ranks below
        let catalog = vec![
            create_ball(10, 3.25, 7.0, "1500"),
            create_ball(20, 3.25, 7.0, "1500"),
            create_ball(30, 0.5, 1.0, "2000"),
        ];

        let result = recommender.recommend(&create_specs(), &create_pattern(), &catalog);

        assert_eq!(result.recommendations[0].ball.id, 10);
        assert_eq!(result.recommendations[1].ball.id, 20);
        assert_eq!(
            result.recommendations[0].match_score,
            result.recommendations[1].match_score
        );
        assert_eq!(result.recommendations[2].ball.id, 30);
    }

    #[test]
    fn test_respects_result_cap() {
        let recommender = Recommender::new(5);
        let catalog: Vec<Ball> = (0..20)
            .map(|i| create_ball(i, (i % 6) as f64 * 0.8, (i % 10) as f64, "2000"))
            .collect();

        let result = recommender.recommend(&create_specs(), &create_pattern(), &catalog);

        assert_eq!(result.recommendations.len(), 5);
        assert_eq!(result.total_candidates, 20);
    }

    #[test]
    fn test_every_recommendation_carries_a_reason() {
        let recommender = Recommender::with_default_limit();
        let catalog = vec![
            create_ball(1, 5.0, 9.0, "1500"),
            create_ball(2, 0.5, 1.0, "2000"),
        ];

        let result = recommender.recommend(&create_specs(), &create_pattern(), &catalog);

        for rec in &result.recommendations {
            assert!(!rec.recommendation_reason.is_empty());
        }
    }

    #[test]
    fn test_empty_catalog() {
        let recommender = Recommender::with_default_limit();
        let result = recommender.recommend(&create_specs(), &create_pattern(), &[]);

        assert!(result.recommendations.is_empty());
        assert_eq!(result.total_candidates, 0);
    }
}
