use crate::models::{Dimension, NatureOrCity, OnboardingAnswers, PreferenceVector, QuietOrLively};
use thiserror::Error;

/// Errors produced while turning onboarding answers into a vibe vector.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VibeError {
    #[error("crowd_tolerance must be an integer between 0 and 10, got {0}")]
    CrowdToleranceOutOfRange(i64),

    #[error("vibe dimension {dimension} is out of range: {value}")]
    DimensionOutOfRange { dimension: Dimension, value: u8 },
}

/// Map short-form onboarding answers onto the shared vibe vector.
///
/// Each answer writes disjoint dimensions, so the rules are order-independent:
/// - quiet/lively sets `lowkey` and `social`
/// - nature/city sets `nature`
/// - crowd tolerance sets `crowds` verbatim after range validation
///
/// Missing answers leave their dimensions at the neutral midpoint. The crowd
/// tolerance is caller-supplied and is rejected when outside [0, 10], never
/// silently clamped.
pub fn map_answers(answers: &OnboardingAnswers) -> Result<PreferenceVector, VibeError> {
    let mut vibe = PreferenceVector::neutral();

    match answers.quiet_or_lively {
        Some(QuietOrLively::Quiet) => {
            vibe.lowkey = 8;
            vibe.social = 3;
        }
        Some(QuietOrLively::Lively) => {
            vibe.lowkey = 2;
            vibe.social = 8;
        }
        None => {}
    }

    match answers.nature_or_city {
        Some(NatureOrCity::Nature) => vibe.nature = 9,
        Some(NatureOrCity::City) => vibe.nature = 3,
        None => {}
    }

    if let Some(tolerance) = answers.crowd_tolerance {
        if !(0..=10).contains(&tolerance) {
            return Err(VibeError::CrowdToleranceOutOfRange(tolerance));
        }
        vibe.crowds = tolerance as u8;
    }

    // Structurally unreachable given the rules above, but the invariant is
    // checked anyway so a violation names the offending dimension.
    if let Some((dimension, value)) = vibe.out_of_range() {
        return Err(VibeError::DimensionOutOfRange { dimension, value });
    }

    Ok(vibe)
}
