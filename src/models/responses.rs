use crate::models::domain::{BudgetTier, GroupTier, PersonaAnswers, PreferenceVector, ScoredPlace};
use serde::{Deserialize, Serialize};

/// Response after creating a profile from either onboarding flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileCreatedResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub vibe: PreferenceVector,
    #[serde(rename = "budgetTier")]
    pub budget_tier: BudgetTier,
    #[serde(rename = "groupTier")]
    pub group_tier: GroupTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<PersonaAnswers>,
}

/// Response for the recommendation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub recommendations: Vec<ScoredPlace>,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
}

/// Response carrying an itinerary from the upstream generator. The payload
/// is an opaque blob; this service never inspects its structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub itinerary: serde_json::Value,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
