//! Wander Algo - High-performance destination matching service for the Wander travel app
//!
//! This library provides the preference-vector matching core used by the
//! Wander travel app: onboarding answers become a 4-dimensional vibe vector,
//! destinations carry vectors in the same space, and candidates are ranked
//! by a bounded, symmetric compatibility score.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    classify_budget, classify_group, estimate, map_answers, score_vibes, Recommender, VibeError,
};
pub use crate::models::{
    Destination, OnboardingAnswers, PersonaAnswers, PreferenceVector, ScoredPlace, TravelerProfile,
    VibeScore,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let vibe = map_answers(&OnboardingAnswers::default()).unwrap();
        assert_eq!(vibe, PreferenceVector::neutral());
    }
}
