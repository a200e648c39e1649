// Route exports
pub mod itinerary;
pub mod profiles;
pub mod recommendations;

use crate::core::Recommender;
use crate::models::HealthResponse;
use crate::services::{CacheManager, DestinationCatalog, ItineraryClient, PostgresStore, ProfileStore};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileStore>,
    pub catalog: Arc<dyn DestinationCatalog>,
    pub cache: Arc<CacheManager>,
    pub itinerary: Arc<ItineraryClient>,
    pub recommender: Recommender,
    pub db: Arc<PostgresStore>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(profiles::configure)
            .configure(recommendations::configure)
            .configure(itinerary::configure),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.db.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use crate::models::HealthResponse;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
