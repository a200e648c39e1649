use crate::models::{Destination, ErrorResponse, RecommendParams, RecommendResponse};
use crate::routes::AppState;
use crate::services::{CacheKey, StoreError};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/recommendations", web::get().to(recommend))
        .route("/recommendations/all", web::get().to(recommend_all));
}

/// Load the destination catalog, cache-aside.
///
/// Cache failures degrade to the database; they never fail the request.
async fn load_catalog(state: &AppState) -> Result<Vec<Destination>, StoreError> {
    let key = CacheKey::destinations();

    match state.cache.get::<Vec<Destination>>(&key).await {
        Ok(Some(destinations)) => return Ok(destinations),
        Ok(None) => {}
        Err(e) => tracing::warn!("Catalog cache read failed: {}", e),
    }

    let destinations = state.catalog.list().await?;

    if let Err(e) = state.cache.set(&key, &destinations).await {
        tracing::warn!("Catalog cache write failed: {}", e);
    }

    Ok(destinations)
}

/// Tier-filtered recommendations endpoint
///
/// GET /api/v1/recommendations?userId={userId}&limit={limit}
///
/// Returns the top destinations whose budget and group tiers match the
/// user's, ranked by vibe compatibility. `limit` defaults to 10 and is
/// capped at the configured maximum.
async fn recommend(
    state: web::Data<AppState>,
    params: web::Query<RecommendParams>,
) -> impl Responder {
    if let Err(errors) = params.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_id = &params.user_id;
    let requested_limit = params.limit.map(|l| l as usize);
    let effective_limit = state.recommender.effective_limit(requested_limit);

    tracing::info!("Recommending for user: {}, limit: {}", user_id, effective_limit);

    // Profiles and the catalog are immutable, so a cached payload never goes
    // stale within its TTL.
    let cache_key = CacheKey::recommendations(user_id, effective_limit);
    match state.cache.get::<RecommendResponse>(&cache_key).await {
        Ok(Some(cached)) => return HttpResponse::Ok().json(cached),
        Ok(None) => {}
        Err(e) => tracing::warn!("Recommendation cache read failed: {}", e),
    }

    let profile = match state.profiles.get(user_id).await {
        Ok(profile) => profile,
        Err(StoreError::NotFound(what)) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Not found".to_string(),
                message: format!("Unknown {}", what),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch profile {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let destinations = match load_catalog(&state).await {
        Ok(destinations) => destinations,
        Err(e) => {
            tracing::error!("Failed to load catalog: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load catalog".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let result = state
        .recommender
        .recommend(&profile, &destinations, requested_limit);

    let response = RecommendResponse {
        user_id: profile.user_id,
        recommendations: result.scored,
        total_matches: result.total_matches,
    };

    if let Err(e) = state.cache.set(&cache_key, &response).await {
        tracing::warn!("Recommendation cache write failed: {}", e);
    }

    tracing::info!(
        "Returning {} recommendations for user {} ({} tier matches)",
        response.recommendations.len(),
        response.user_id,
        response.total_matches
    );

    HttpResponse::Ok().json(response)
}

/// Full scored catalog, no tier filter, no truncation
///
/// GET /api/v1/recommendations/all?userId={userId}
///
/// Debugging variant: every destination scored against the user's vibe.
async fn recommend_all(
    state: web::Data<AppState>,
    params: web::Query<RecommendParams>,
) -> impl Responder {
    if let Err(errors) = params.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = match state.profiles.get(&params.user_id).await {
        Ok(profile) => profile,
        Err(StoreError::NotFound(what)) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Not found".to_string(),
                message: format!("Unknown {}", what),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch profile {}: {}", params.user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let destinations = match load_catalog(&state).await {
        Ok(destinations) => destinations,
        Err(e) => {
            tracing::error!("Failed to load catalog: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load catalog".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let result = state.recommender.recommend_all(&profile, &destinations);

    HttpResponse::Ok().json(RecommendResponse {
        user_id: profile.user_id,
        recommendations: result.scored,
        total_matches: result.total_matches,
    })
}
