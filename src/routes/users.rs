use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    AddArsenalRequest, ErrorResponse, LogPerformanceRequest, PerformanceQuery,
    PerformanceStatsResponse,
};
use crate::routes::AppState;
use crate::services::Timeframe;

/// How many recent games the stats endpoint includes
const RECENT_GAMES_LIMIT: i64 = 10;

/// Configure arsenal and performance routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/users/{user_id}/arsenal", web::get().to(get_arsenal))
        .route("/users/{user_id}/arsenal", web::post().to(add_to_arsenal))
        .route(
            "/users/{user_id}/performance",
            web::get().to(performance_stats),
        )
        .route(
            "/users/{user_id}/performance",
            web::post().to(log_performance),
        )
        .route(
            "/users/{user_id}/performance/trends",
            web::get().to(performance_trends),
        );
}

/// A user's arsenal, newest first
async fn get_arsenal(state: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    let user_id = path.into_inner();

    match state.postgres.arsenal_for_user(user_id).await {
        Ok(arsenal) => HttpResponse::Ok().json(arsenal),
        Err(e) => {
            tracing::error!("Failed to fetch arsenal for user {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch arsenal".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Add a catalog ball to a user's arsenal
async fn add_to_arsenal(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    req: web::Json<AddArsenalRequest>,
) -> impl Responder {
    let user_id = path.into_inner();

    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.postgres.add_to_arsenal(user_id, &req).await {
        Ok(entry) => HttpResponse::Created().json(entry),
        Err(e) => {
            tracing::error!("Failed to add to arsenal for user {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to add to arsenal".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Log one game
async fn log_performance(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    req: web::Json<LogPerformanceRequest>,
) -> impl Responder {
    let user_id = path.into_inner();

    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.postgres.log_performance(user_id, &req).await {
        Ok(log) => HttpResponse::Created().json(log),
        Err(e) => {
            tracing::error!("Failed to log performance for user {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to log performance".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Aggregated stats plus recent games
///
/// GET /api/v1/users/{user_id}/performance?timeframe=30d
async fn performance_stats(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    query: web::Query<PerformanceQuery>,
) -> impl Responder {
    let user_id = path.into_inner();

    // Unknown timeframe values fall through to all-time
    let window = Timeframe::parse(query.timeframe.as_deref().unwrap_or("30d"));

    let stats = match state.postgres.performance_stats(user_id, window).await {
        Ok(stats) => stats,
        Err(e) => {
            tracing::error!("Failed to fetch performance stats for user {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch performance stats".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let recent_games = match state.postgres.recent_games(user_id, RECENT_GAMES_LIMIT).await {
        Ok(games) => games,
        Err(e) => {
            tracing::error!("Failed to fetch recent games for user {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch recent games".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    HttpResponse::Ok().json(PerformanceStatsResponse {
        stats,
        recent_games,
    })
}

/// Weekly averages over the last six months
async fn performance_trends(state: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    let user_id = path.into_inner();

    match state.postgres.performance_trends(user_id).await {
        Ok(trends) => HttpResponse::Ok().json(trends),
        Err(e) => {
            tracing::error!("Failed to fetch performance trends for user {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch performance trends".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
