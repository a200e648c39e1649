use crate::core::{classify_budget, classify_group, estimate, map_answers};
use crate::models::{
    CreateProfileRequest, ErrorResponse, GroupTier, PersonaAnswers, ProfileCreatedResponse,
    TravelerProfile,
};
use crate::routes::AppState;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure profile-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/profiles/onboarding", web::post().to(create_from_onboarding))
        .route("/profiles/persona", web::post().to(create_from_persona));
}

/// Create a profile from the short onboarding flow
///
/// POST /api/v1/profiles/onboarding
///
/// Request body:
/// ```json
/// {
///   "quietOrLively": "quiet",
///   "natureOrCity": "nature",
///   "crowdTolerance": 3,
///   "budget": "midrange",
///   "travelStyle": "nature"
/// }
/// ```
async fn create_from_onboarding(
    state: web::Data<AppState>,
    req: web::Json<CreateProfileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for onboarding request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let vibe = match map_answers(&req.answers()) {
        Ok(vibe) => vibe,
        Err(e) => {
            tracing::info!("Rejected onboarding answers: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    // The legacy travel-style tag is accepted for wire compatibility but has
    // no mapping into the canonical profile; the short flow collects no
    // companion data either, so the group tier defaults to solo.
    let profile = TravelerProfile {
        user_id: uuid::Uuid::new_v4().to_string(),
        vibe,
        budget_tier: classify_budget(&req.budget),
        group_tier: GroupTier::Solo,
        persona: None,
        created_at: chrono::Utc::now(),
    };

    if let Err(e) = state.profiles.save(&profile).await {
        tracing::error!("Failed to save profile {}: {}", profile.user_id, e);
        return HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Failed to save profile".to_string(),
            message: e.to_string(),
            status_code: 500,
        });
    }

    tracing::info!(
        "Created profile {} from onboarding (style tag: {})",
        profile.user_id,
        req.travel_style
    );

    HttpResponse::Created().json(ProfileCreatedResponse {
        user_id: profile.user_id,
        vibe: profile.vibe,
        budget_tier: profile.budget_tier,
        group_tier: profile.group_tier,
        persona: None,
    })
}

/// Create a profile from the full persona questionnaire
///
/// POST /api/v1/profiles/persona
///
/// The body is the 10-field persona; unknown enum values are rejected as
/// invalid JSON before this handler runs.
async fn create_from_persona(
    state: web::Data<AppState>,
    req: web::Json<PersonaAnswers>,
) -> impl Responder {
    let persona = req.into_inner();

    let profile = TravelerProfile {
        user_id: uuid::Uuid::new_v4().to_string(),
        vibe: estimate(&persona),
        budget_tier: classify_budget(persona.budget.as_str()),
        group_tier: classify_group(persona.companions),
        persona: Some(persona),
        created_at: chrono::Utc::now(),
    };

    if let Err(e) = state.profiles.save(&profile).await {
        tracing::error!("Failed to save profile {}: {}", profile.user_id, e);
        return HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Failed to save profile".to_string(),
            message: e.to_string(),
            status_code: 500,
        });
    }

    tracing::info!("Created profile {} from persona", profile.user_id);

    HttpResponse::Created().json(ProfileCreatedResponse {
        user_id: profile.user_id,
        vibe: profile.vibe,
        budget_tier: profile.budget_tier,
        group_tier: profile.group_tier,
        persona: profile.persona,
    })
}
