use crate::models::domain::{NatureOrCity, OnboardingAnswers, QuietOrLively};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a profile from the short onboarding flow.
///
/// The three vibe answers are optional; the legacy budget and travel-style
/// tags are required.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[serde(alias = "quiet_or_lively", rename = "quietOrLively", default)]
    pub quiet_or_lively: Option<QuietOrLively>,
    #[serde(alias = "nature_or_city", rename = "natureOrCity", default)]
    pub nature_or_city: Option<NatureOrCity>,
    #[serde(alias = "crowd_tolerance", rename = "crowdTolerance", default)]
    pub crowd_tolerance: Option<i64>,
    #[validate(length(min = 1))]
    pub budget: String,
    #[validate(length(min = 1))]
    #[serde(alias = "travel_style", rename = "travelStyle")]
    pub travel_style: String,
}

impl CreateProfileRequest {
    pub fn answers(&self) -> OnboardingAnswers {
        OnboardingAnswers {
            quiet_or_lively: self.quiet_or_lively,
            nature_or_city: self.nature_or_city,
            crowd_tolerance: self.crowd_tolerance,
        }
    }
}

/// Query parameters for the recommendation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendParams {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to generate an itinerary for an existing profile.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ItineraryRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
}
