use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{CreatePatternRequest, ErrorResponse, PatternsQuery};
use crate::routes::AppState;
use crate::services::PostgresError;

/// Configure oil pattern routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/patterns", web::get().to(list_patterns))
        .route("/patterns", web::post().to(create_pattern))
        .route("/patterns/{id}", web::get().to(get_pattern));
}

/// List oil patterns, optionally filtered by category
///
/// GET /api/v1/patterns?category=Sport
async fn list_patterns(
    state: web::Data<AppState>,
    query: web::Query<PatternsQuery>,
) -> impl Responder {
    // "all" is the client's explicit no-filter value
    let category = query
        .category
        .as_deref()
        .filter(|c| !c.is_empty() && *c != "all");

    match state.postgres.list_patterns(category).await {
        Ok(patterns) => HttpResponse::Ok().json(patterns),
        Err(e) => {
            tracing::error!("Failed to fetch patterns: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch patterns".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Fetch a single pattern by id
async fn get_pattern(state: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    let id = path.into_inner();

    match state.postgres.get_pattern(id).await {
        Ok(pattern) => HttpResponse::Ok().json(pattern),
        Err(PostgresError::NotFound(message)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Pattern not found".to_string(),
            message,
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch pattern {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch pattern".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Create a custom oil pattern
///
/// POST /api/v1/patterns
async fn create_pattern(
    state: web::Data<AppState>,
    req: web::Json<CreatePatternRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.postgres.create_pattern(&req).await {
        Ok(pattern) => HttpResponse::Created().json(pattern),
        Err(e) => {
            tracing::error!("Failed to create pattern: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to create pattern".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
