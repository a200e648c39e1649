use crate::models::{
    Accommodation, ActivityLevel, BudgetTier, Companions, CrowdComfort, Dimension, GroupTier,
    Pace, PersonaAnswers, PreferenceVector, TravelStyle,
};

/// One additive scoring rule: when `applies` holds for a persona, `delta`
/// is added to `dimension` before clamping.
pub struct VibeRule {
    pub dimension: Dimension,
    pub applies: fn(&PersonaAnswers) -> bool,
    pub delta: i8,
}

/// The heuristic scoring table. Rules within a dimension are summed onto a
/// baseline of 5, then the dimension is clamped to [0, 10]; the order of
/// rules never matters. `crowds` is not rule-driven, see [`estimate`].
///
/// This is a heuristic projection, not a learned model. Its contract is
/// determinism and range-safety only.
pub static VIBE_RULES: &[VibeRule] = &[
    // lowkey: calmer pace, crowd avoidance, low activity, wellness
    VibeRule { dimension: Dimension::Lowkey, applies: |p| p.pace == Pace::Slow, delta: 3 },
    VibeRule { dimension: Dimension::Lowkey, applies: |p| p.pace == Pace::Balanced, delta: 1 },
    VibeRule { dimension: Dimension::Lowkey, applies: |p| p.pace == Pace::Fast, delta: -2 },
    VibeRule { dimension: Dimension::Lowkey, applies: |p| p.crowds == CrowdComfort::Avoid, delta: 2 },
    VibeRule { dimension: Dimension::Lowkey, applies: |p| p.crowds == CrowdComfort::Embrace, delta: -2 },
    VibeRule { dimension: Dimension::Lowkey, applies: |p| p.activity == ActivityLevel::Low, delta: 2 },
    VibeRule { dimension: Dimension::Lowkey, applies: |p| p.activity == ActivityLevel::High, delta: -2 },
    VibeRule { dimension: Dimension::Lowkey, applies: |p| p.travel_style == TravelStyle::Wellness, delta: 2 },
    VibeRule { dimension: Dimension::Lowkey, applies: |p| p.travel_style == TravelStyle::Adventure, delta: -2 },
    // nature: outdoor styles, crowd avoidance
    VibeRule { dimension: Dimension::Nature, applies: |p| p.travel_style == TravelStyle::Nature, delta: 4 },
    VibeRule { dimension: Dimension::Nature, applies: |p| p.travel_style == TravelStyle::Cultural, delta: -2 },
    VibeRule { dimension: Dimension::Nature, applies: |p| p.travel_style == TravelStyle::Adventure, delta: 2 },
    VibeRule { dimension: Dimension::Nature, applies: |p| p.crowds == CrowdComfort::Avoid, delta: 1 },
    // social: companions, accommodation, shared-table styles
    VibeRule { dimension: Dimension::Social, applies: |p| p.companions == Companions::Solo, delta: -1 },
    VibeRule { dimension: Dimension::Social, applies: |p| p.companions == Companions::Friends, delta: 3 },
    VibeRule {
        dimension: Dimension::Social,
        applies: |p| matches!(p.companions, Companions::FamilyKids | Companions::FamilyAdults),
        delta: 2,
    },
    VibeRule { dimension: Dimension::Social, applies: |p| p.accommodation == Accommodation::Hostel, delta: 3 },
    VibeRule { dimension: Dimension::Social, applies: |p| p.accommodation == Accommodation::Premium, delta: -1 },
    VibeRule { dimension: Dimension::Social, applies: |p| p.travel_style == TravelStyle::Cultural, delta: 2 },
    VibeRule { dimension: Dimension::Social, applies: |p| p.travel_style == TravelStyle::Food, delta: 2 },
];

const BASELINE: i16 = 5;

fn clamp_dimension(value: i16) -> u8 {
    value.clamp(0, PreferenceVector::MAX as i16) as u8
}

/// Project a full persona questionnaire onto the shared vibe vector.
///
/// `lowkey`, `nature` and `social` start at the baseline and accumulate the
/// matching rule deltas; `crowds` maps directly from the crowd-comfort
/// answer. Each dimension is clamped to [0, 10] independently, so the
/// result is always a valid vector and this function cannot fail.
pub fn estimate(persona: &PersonaAnswers) -> PreferenceVector {
    let mut lowkey = BASELINE;
    let mut nature = BASELINE;
    let mut social = BASELINE;

    for rule in VIBE_RULES {
        if !(rule.applies)(persona) {
            continue;
        }
        match rule.dimension {
            Dimension::Lowkey => lowkey += rule.delta as i16,
            Dimension::Nature => nature += rule.delta as i16,
            Dimension::Social => social += rule.delta as i16,
            Dimension::Crowds => {}
        }
    }

    let crowds = match persona.crowds {
        CrowdComfort::Avoid => 2,
        CrowdComfort::Mixed => 5,
        CrowdComfort::Embrace => 8,
    };

    PreferenceVector {
        lowkey: clamp_dimension(lowkey),
        nature: clamp_dimension(nature),
        crowds,
        social: clamp_dimension(social),
    }
}

/// Classify a raw budget tag into a coarse tier.
///
/// The tag is a free string on the legacy onboarding path; anything
/// unrecognized falls back to the medium tier rather than failing.
pub fn classify_budget(budget: &str) -> BudgetTier {
    match budget {
        "budget" => BudgetTier::Low,
        "midrange" | "comfortable" => BudgetTier::Medium,
        "luxury" => BudgetTier::High,
        _ => BudgetTier::Medium,
    }
}

/// Classify companions into a coarse group tier.
pub fn classify_group(companions: Companions) -> GroupTier {
    match companions {
        Companions::Solo => GroupTier::Solo,
        Companions::Couple => GroupTier::Couple,
        Companions::FamilyKids | Companions::FamilyAdults | Companions::Friends => GroupTier::Group,
    }
}
