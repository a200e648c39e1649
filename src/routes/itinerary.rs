use crate::models::{ErrorResponse, ItineraryRequest, ItineraryResponse};
use crate::routes::AppState;
use crate::services::{ItineraryError, StoreError};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure itinerary routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/itinerary", web::post().to(generate_itinerary));
}

/// Generate an itinerary via the external AI service
///
/// POST /api/v1/itinerary
///
/// Request body:
/// ```json
/// { "userId": "string" }
/// ```
///
/// Requires a persona-based profile; short-form profiles carry too little
/// context for the generator.
async fn generate_itinerary(
    state: web::Data<AppState>,
    req: web::Json<ItineraryRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = match state.profiles.get(&req.user_id).await {
        Ok(profile) => profile,
        Err(StoreError::NotFound(what)) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Not found".to_string(),
                message: format!("Unknown {}", what),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch profile {}: {}", req.user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    if profile.persona.is_none() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Persona required".to_string(),
            message: "Itinerary generation needs a persona-based profile".to_string(),
            status_code: 400,
        });
    }

    match state.itinerary.generate(&profile).await {
        Ok(itinerary) => HttpResponse::Ok().json(ItineraryResponse {
            user_id: profile.user_id,
            itinerary,
        }),
        Err(e @ ItineraryError::Unavailable(_)) => {
            tracing::error!("Itinerary service unreachable for {}: {}", profile.user_id, e);
            HttpResponse::ServiceUnavailable().json(ErrorResponse {
                error: "Itinerary service unavailable".to_string(),
                message: e.to_string(),
                status_code: 503,
            })
        }
        Err(e) => {
            tracing::error!("Itinerary generation failed for {}: {}", profile.user_id, e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Itinerary generation failed".to_string(),
                message: e.to_string(),
                status_code: 502,
            })
        }
    }
}
