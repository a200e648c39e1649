// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Accommodation, ActivityLevel, BudgetLevel, BudgetTier, Companions, CrowdComfort, Destination,
    Dimension, GroupTier, NatureOrCity, OnboardingAnswers, Pace, PersonaAnswers, PreferenceVector,
    QuietOrLively, ScoredPlace, Timing, TravelerProfile, TravelStyle, TripDuration, VibeBreakdown,
    VibeScore,
};
pub use requests::{CreateProfileRequest, ItineraryRequest, RecommendParams};
pub use responses::{
    ErrorResponse, HealthResponse, ItineraryResponse, ProfileCreatedResponse, RecommendResponse,
};
