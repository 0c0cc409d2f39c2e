use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ErrorResponse, RecommendationsRequest, RecommendationsResponse};
use crate::routes::AppState;

/// Configure ball catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/balls", web::get().to(list_balls))
        .route("/balls/recommendations", web::post().to(recommendations));
}

/// Full ball catalog, ordered by brand and name
async fn list_balls(state: web::Data<AppState>) -> impl Responder {
    match state.postgres.list_balls().await {
        Ok(balls) => HttpResponse::Ok().json(balls),
        Err(e) => {
            tracing::error!("Failed to fetch balls: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch balls".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Ball recommendations endpoint
///
/// POST /api/v1/balls/recommendations
///
/// Request body:
/// ```json
/// {
///   "bowlerSpecs": { "rev_rate": 350, "ball_speed": 16.5 },
///   "oilPattern": { "name": "Shark", "length": 43, "volume": 27 }
/// }
/// ```
///
/// Scores every catalog ball against the bowler/pattern pair and returns the
/// ranked top results with per-ball explanations.
async fn recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendationsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendations request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // One immutable catalog snapshot per scoring batch
    let catalog = match state.catalog.snapshot(&state.postgres).await {
        Ok(balls) => balls,
        Err(e) => {
            tracing::error!("Failed to load ball catalog: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load ball catalog".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let result = state
        .recommender
        .recommend(&req.bowler_specs, &req.oil_pattern, &catalog);

    tracing::info!(
        "Returning {} recommendations for the {} pattern (from {} balls)",
        result.recommendations.len(),
        req.oil_pattern.name,
        result.total_candidates
    );

    HttpResponse::Ok().json(RecommendationsResponse {
        recommendations: result.recommendations,
        total_candidates: result.total_candidates,
    })
}
