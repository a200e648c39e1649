use serde::{Deserialize, Serialize};

/// Shared 4-dimensional vibe representation used by travelers and destinations.
///
/// Every dimension is an integer in [0, 10]. Higher `lowkey` means calmer
/// experiences, higher `nature` means natural over urban settings, higher
/// `crowds` means more tolerance for crowded places, higher `social` means
/// more socially active experiences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceVector {
    pub lowkey: u8,
    pub nature: u8,
    pub crowds: u8,
    pub social: u8,
}

impl PreferenceVector {
    pub const MAX: u8 = 10;
    pub const MIDPOINT: u8 = 5;

    /// All dimensions at the neutral midpoint.
    pub fn neutral() -> Self {
        Self {
            lowkey: Self::MIDPOINT,
            nature: Self::MIDPOINT,
            crowds: Self::MIDPOINT,
            social: Self::MIDPOINT,
        }
    }

    pub fn new(lowkey: u8, nature: u8, crowds: u8, social: u8) -> Self {
        Self { lowkey, nature, crowds, social }
    }

    /// Read a single dimension.
    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Lowkey => self.lowkey,
            Dimension::Nature => self.nature,
            Dimension::Crowds => self.crowds,
            Dimension::Social => self.social,
        }
    }

    /// Returns the first dimension whose value is outside [0, 10], if any.
    ///
    /// Values are stored unsigned, so only the upper bound can be violated.
    pub fn out_of_range(&self) -> Option<(Dimension, u8)> {
        Dimension::ALL
            .iter()
            .map(|&d| (d, self.get(d)))
            .find(|&(_, v)| v > Self::MAX)
    }
}

/// The four vibe dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Lowkey,
    Nature,
    Crowds,
    Social,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Lowkey,
        Dimension::Nature,
        Dimension::Crowds,
        Dimension::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Lowkey => "lowkey",
            Dimension::Nature => "nature",
            Dimension::Crowds => "crowds",
            Dimension::Social => "social",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-dimension absolute difference between two vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibeBreakdown {
    pub lowkey: u8,
    pub nature: u8,
    pub crowds: u8,
    pub social: u8,
}

/// Compatibility between two preference vectors: a 0-100 score plus the
/// per-dimension differences it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibeScore {
    pub score: u8,
    pub breakdown: VibeBreakdown,
}

/// Coarse budget classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

impl BudgetTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Low => "low",
            BudgetTier::Medium => "medium",
            BudgetTier::High => "high",
        }
    }
}

/// Coarse companion classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupTier {
    Solo,
    Couple,
    Group,
}

impl GroupTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupTier::Solo => "solo",
            GroupTier::Couple => "couple",
            GroupTier::Group => "group",
        }
    }
}

/// Short-form onboarding: quiet/lively binary choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuietOrLively {
    Quiet,
    Lively,
}

/// Short-form onboarding: nature/city binary choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NatureOrCity {
    Nature,
    City,
}

/// Raw short-form onboarding answers. All fields are optional; missing
/// answers leave the corresponding dimensions at the neutral midpoint.
///
/// `crowd_tolerance` is kept wide on purpose: it is caller-supplied and the
/// mapper validates the [0, 10] range explicitly instead of clamping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnboardingAnswers {
    #[serde(default)]
    pub quiet_or_lively: Option<QuietOrLively>,
    #[serde(default)]
    pub nature_or_city: Option<NatureOrCity>,
    #[serde(default)]
    pub crowd_tolerance: Option<i64>,
}

/// Trip duration bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripDuration {
    Short,
    Medium,
    Long,
    Extended,
}

/// Who the traveler is going with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Companions {
    Solo,
    Couple,
    FamilyKids,
    FamilyAdults,
    Friends,
}

/// Spending comfort level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Budget,
    Midrange,
    Comfortable,
    Luxury,
}

impl BudgetLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetLevel::Budget => "budget",
            BudgetLevel::Midrange => "midrange",
            BudgetLevel::Comfortable => "comfortable",
            BudgetLevel::Luxury => "luxury",
        }
    }
}

/// Preferred travel pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Slow,
    Balanced,
    Fast,
}

/// Dominant travel style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Adventure,
    Cultural,
    Nature,
    Food,
    Wellness,
    Photography,
}

/// Physical activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Medium,
    High,
}

/// Comfort with crowded places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrowdComfort {
    Avoid,
    Mixed,
    Embrace,
}

/// Accommodation preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accommodation {
    Hostel,
    Standard,
    Boutique,
    Premium,
}

/// Preferred time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timing {
    Morning,
    Flexible,
    Evening,
}

/// Full persona questionnaire. Every field is a closed enumeration, so
/// unknown values are rejected at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaAnswers {
    pub duration: TripDuration,
    pub companions: Companions,
    pub budget: BudgetLevel,
    pub pace: Pace,
    #[serde(rename = "travelStyle")]
    pub travel_style: TravelStyle,
    pub activity: ActivityLevel,
    pub crowds: CrowdComfort,
    pub accommodation: Accommodation,
    pub remote: bool,
    pub timing: Timing,
}

/// A traveler's profile. Created once at onboarding and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelerProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub vibe: PreferenceVector,
    #[serde(rename = "budgetTier")]
    pub budget_tier: BudgetTier,
    #[serde(rename = "groupTier")]
    pub group_tier: GroupTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<PersonaAnswers>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A candidate destination from the catalog. Read-only reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    #[serde(rename = "placeId")]
    pub place_id: String,
    pub name: String,
    pub region: String,
    pub description: String,
    pub vibe: PreferenceVector,
    #[serde(rename = "budgetTier")]
    pub budget_tier: BudgetTier,
    #[serde(rename = "groupTier")]
    pub group_tier: GroupTier,
}

/// A scored candidate destination. Derived per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPlace {
    #[serde(rename = "placeId")]
    pub place_id: String,
    #[serde(rename = "placeName")]
    pub place_name: String,
    pub region: String,
    pub description: String,
    pub score: u8,
    pub vibe_compatibility: VibeBreakdown,
}
