// Core algorithm exports
pub mod recommender;
pub mod scoring;

pub use recommender::{Recommender, RecommendationResult, DEFAULT_MAX_RESULTS};
pub use scoring::{calculate_match_score, recommendation_reason};
