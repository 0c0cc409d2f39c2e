// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ArsenalBall, ArsenalEntry, Ball, BallRecommendation, BowlerSpecs, OilPattern, PerformanceLog,
    PerformanceStats, RecentGame, TrendPoint, DEFAULT_SURFACE_GRIT,
};
pub use requests::{
    AddArsenalRequest, CreatePatternRequest, LogPerformanceRequest, PatternsQuery,
    PerformanceQuery, RecommendationsRequest,
};
pub use responses::{
    ErrorResponse, HealthResponse, PerformanceStatsResponse, RecommendationsResponse,
};
