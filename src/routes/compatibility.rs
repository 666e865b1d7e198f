use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{calculate_compatibility, Matcher};
use crate::error::ApiError;
use crate::models::{HealthResponse, RankRequest, RankResponse, ScoreRequest, ScoreResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

impl AppState {
    pub fn new(matching: MatchingSettings) -> Self {
        Self {
            matcher: Matcher::new(matching.min_score, matching.chunk_size),
            matching,
        }
    }
}

/// Configure all compatibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/compatibility/score", web::post().to(score_pair))
        .route("/compatibility/rank", web::post().to(rank_candidates));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score one pair of profiles
///
/// POST /api/v1/compatibility/score
///
/// Request body:
/// ```json
/// {
///   "profileA": { "workoutTypes": ["Running"], "fitnessLevel": "Beginner" },
///   "profileB": { "workoutTypes": ["Running", "Yoga"] },
///   "topReasons": 3
/// }
/// ```
async fn score_pair(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let top_reasons = req.top_reasons.unwrap_or(state.matching.top_reasons);
    let result = calculate_compatibility(&req.profile_a, &req.profile_b);

    tracing::debug!(
        overall = result.overall_score(),
        level = ?result.level(),
        "Scored profile pair"
    );

    Ok(HttpResponse::Ok().json(ScoreResponse::from_result(&result, top_reasons)))
}

/// Rank candidates against a seeker profile
///
/// POST /api/v1/compatibility/rank
///
/// Request body:
/// ```json
/// {
///   "profile": { "workoutTypes": ["Running"] },
///   "candidates": [{ "id": "user-1", "workoutTypes": ["Running"] }],
///   "limit": 20
/// }
/// ```
async fn rank_candidates(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let RankRequest {
        profile,
        candidates,
        limit,
    } = req.into_inner();

    let max = state.matching.max_candidates;
    if candidates.len() > max {
        tracing::info!("Rejecting rank request with {} candidates (max {})", candidates.len(), max);
        return Err(ApiError::TooManyCandidates {
            count: candidates.len(),
            max,
        });
    }

    let limit = limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;
    let concurrent = candidates.len() >= state.matching.parallel_threshold;

    tracing::info!(
        "Ranking {} candidates, limit: {}, concurrent: {}",
        candidates.len(),
        limit,
        concurrent
    );

    let result = if concurrent {
        state
            .matcher
            .rank_concurrent(Arc::new(profile), candidates, limit)
            .await
            .map_err(|e| {
                tracing::error!("Concurrent ranking failed: {}", e);
                e
            })?
    } else {
        state.matcher.rank(&profile, candidates, limit)
    };

    let response = RankResponse::from_result(&result, state.matching.top_reasons);

    tracing::info!(
        "Returning {} matches (from {} candidates)",
        response.matches.len(),
        result.total_candidates
    );

    Ok(HttpResponse::Ok().json(response))
}
