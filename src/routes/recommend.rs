use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Recommender;
use crate::models::{ErrorResponse, HealthResponse, RecommendRequest, RecommendResponse};
use crate::services::{CatalogStore, ModelCache};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub model: Arc<ModelCache>,
    pub recommender: Recommender,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommend", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.catalog.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommend endpoint
///
/// POST /api/v1/recommend
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "age": 22,
///   "country": "string",
///   "education_level": "Bachelor",
///   "gpa": 3.5,
///   "field_of_study": "string",
///   "income": 40000
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = req.into_inner().into_profile();

    tracing::info!("Ranking catalog for candidate: {}", profile.name);

    // Persist the submission (best-effort, the ranking must not depend on it)
    if let Err(e) = state.catalog.save_profile(&profile).await {
        tracing::warn!("Failed to persist submitted profile, continuing: {}", e);
    }

    // Fetch the offer catalog snapshot
    let offers = match state.catalog.all_offers().await {
        Ok(offers) => offers,
        Err(e) => {
            tracing::error!("Failed to fetch offer catalog: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch offer catalog".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    // Load (or build) the statistics snapshot
    let stats = match state.model.load(&offers) {
        Ok(stats) => stats,
        Err(e) => {
            tracing::error!("Failed to derive catalog statistics: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to derive catalog statistics".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let recommendations = state.recommender.recommend(&profile, &offers, &stats);

    tracing::info!(
        "Returning {} recommendations ({} eligible) for {}",
        recommendations.len(),
        recommendations.iter().filter(|r| r.eligible).count(),
        profile.name
    );

    HttpResponse::Ok().json(RecommendResponse {
        total_offers: offers.len(),
        student: profile,
        recommendations,
    })
}
