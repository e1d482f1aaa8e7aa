use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::config::RankingSettings;
use crate::core::{resolve_weights, Comparator};
use crate::models::{
    BaselineResidence, ErrorResponse, HealthResponse, PreferenceProfile, RankRequest,
    RankResponse, ScoreRequest, WeightsRequest, WeightsResponse,
};

/// Application state shared across all handlers
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub ranking: RankingSettings,
}

/// Configure all scoring routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/weights", web::post().to(weights))
        .route("/score", web::post().to(score))
        .route("/rank", web::post().to(rank));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Build a comparator for the request's profile and optional baseline
fn comparator_for(profile: PreferenceProfile, baseline: Option<&BaselineResidence>) -> Comparator {
    let comparator = Comparator::new(profile);
    match baseline {
        Some(home) => comparator.with_baseline(home),
        None => comparator,
    }
}

/// Resolve importance ranks into weights
///
/// POST /api/v1/weights
///
/// Request body:
/// ```json
/// { "importance": { "price": 1, "location": 2 } }
/// ```
async fn weights(req: web::Json<WeightsRequest>) -> impl Responder {
    let weights = resolve_weights(&req.importance);
    tracing::debug!("Resolved weights {:?}", weights);

    HttpResponse::Ok().json(WeightsResponse { weights })
}

/// Score a single candidate
///
/// POST /api/v1/score
///
/// Request body:
/// ```json
/// {
///   "profile": { "clientId": "string", "importance": {}, "budgetLimit": 8000 },
///   "candidate": { "price": 7000, "stationMinutes": 6, "areaSqm": 68 },
///   "baseline": null
/// }
/// ```
async fn score(req: web::Json<ScoreRequest>) -> impl Responder {
    let ScoreRequest {
        profile,
        candidate,
        baseline,
    } = req.into_inner();

    let client_id = profile.client_id.clone();
    let comparator = comparator_for(profile, baseline.as_ref());
    let result = comparator.score(&candidate);

    tracing::info!(
        "Scored candidate {} for client {}: fit {:.4}, index {:.1}",
        result.candidate_id,
        client_id,
        result.fit,
        result.index
    );

    HttpResponse::Ok().json(result)
}

/// Score and rank a batch of candidates
///
/// POST /api/v1/rank
///
/// Request body:
/// ```json
/// {
///   "profile": { "clientId": "string" },
///   "candidates": [{ "price": 7000, "stationMinutes": 6, "areaSqm": 68 }],
///   "baseline": null,
///   "limit": 10
/// }
/// ```
async fn rank(state: web::Data<AppState>, req: web::Json<RankRequest>) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let RankRequest {
        profile,
        candidates,
        baseline,
        limit,
    } = req.into_inner();

    let limit = state.ranking.effective_limit(limit);
    let client_id = profile.client_id.clone();

    tracing::info!(
        "Ranking {} candidates for client {}, limit: {}",
        candidates.len(),
        client_id,
        limit
    );

    let comparator = comparator_for(profile, baseline.as_ref());
    let result = comparator.rank(&candidates, limit);

    let response = RankResponse {
        results: result.results,
        total_candidates: result.total_candidates,
        baseline_fit: result.baseline_fit,
    };

    tracing::info!(
        "Returning {} results for client {} (from {} candidates)",
        response.results.len(),
        client_id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}
