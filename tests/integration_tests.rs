// Integration tests for Wander Algo

use wander_algo::core::{classify_budget, classify_group, estimate, map_answers, Recommender};
use wander_algo::models::{
    Accommodation, ActivityLevel, BudgetLevel, BudgetTier, Companions, CrowdComfort, Destination,
    GroupTier, NatureOrCity, OnboardingAnswers, Pace, PersonaAnswers, PreferenceVector,
    QuietOrLively, Timing, TravelerProfile, TravelStyle, TripDuration,
};
use wander_algo::services::{DestinationCatalog, MemoryCatalog, MemoryProfileStore, ProfileStore, StoreError};
use chrono::Utc;

fn destination(
    id: &str,
    vibe: PreferenceVector,
    budget: BudgetTier,
    group: GroupTier,
) -> Destination {
    Destination {
        place_id: id.to_string(),
        name: format!("Place {}", id),
        region: "Test Region".to_string(),
        description: "A destination for tests".to_string(),
        vibe,
        budget_tier: budget,
        group_tier: group,
    }
}

fn test_catalog() -> Vec<Destination> {
    vec![
        destination("quiet-coast", PreferenceVector::new(8, 9, 2, 3), BudgetTier::Low, GroupTier::Solo),
        destination("calm-lakes", PreferenceVector::new(9, 8, 2, 2), BudgetTier::Low, GroupTier::Solo),
        destination("city-buzz", PreferenceVector::new(2, 2, 9, 9), BudgetTier::Low, GroupTier::Solo),
        destination("party-island", PreferenceVector::new(1, 4, 9, 10), BudgetTier::Low, GroupTier::Group),
        destination("luxury-spa", PreferenceVector::new(9, 7, 2, 3), BudgetTier::High, GroupTier::Couple),
        destination("festival-city", PreferenceVector::new(2, 1, 10, 9), BudgetTier::Medium, GroupTier::Group),
    ]
}

fn onboarding_profile(answers: &OnboardingAnswers, budget_tag: &str) -> TravelerProfile {
    TravelerProfile {
        user_id: "onboarded_user".to_string(),
        vibe: map_answers(answers).unwrap(),
        budget_tier: classify_budget(budget_tag),
        group_tier: GroupTier::Solo,
        persona: None,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_end_to_end_onboarding_to_recommendations() {
    // Short onboarding flow: quiet, nature, low crowd tolerance, budget tag.
    let answers = OnboardingAnswers {
        quiet_or_lively: Some(QuietOrLively::Quiet),
        nature_or_city: Some(NatureOrCity::Nature),
        crowd_tolerance: Some(2),
    };

    let profile = onboarding_profile(&answers, "budget");
    assert_eq!(profile.vibe, PreferenceVector::new(8, 9, 2, 3));
    assert_eq!(profile.budget_tier, BudgetTier::Low);

    let store = MemoryProfileStore::new();
    store.save(&profile).await.unwrap();

    let catalog = MemoryCatalog::new(test_catalog());
    let destinations = catalog.list().await.unwrap();

    let recommender = Recommender::new(10, 50);
    let loaded = store.get("onboarded_user").await.unwrap();
    let result = recommender.recommend(&loaded, &destinations, None);

    // Only the three low/solo destinations pass the tier filter.
    assert_eq!(result.total_matches, 3);

    // The quiet nature lover gets the quiet coast first, the noisy city last.
    assert_eq!(result.scored[0].place_id, "quiet-coast");
    assert_eq!(result.scored[0].score, 100);
    assert_eq!(result.scored.last().unwrap().place_id, "city-buzz");

    for pair in result.scored.windows(2) {
        assert!(pair[0].score >= pair[1].score, "results not sorted by score");
    }
}

#[tokio::test]
async fn test_end_to_end_persona_to_recommendations() {
    let persona = PersonaAnswers {
        duration: TripDuration::Medium,
        companions: Companions::Friends,
        budget: BudgetLevel::Budget,
        pace: Pace::Fast,
        travel_style: TravelStyle::Food,
        activity: ActivityLevel::High,
        crowds: CrowdComfort::Embrace,
        accommodation: Accommodation::Hostel,
        remote: false,
        timing: Timing::Evening,
    };

    let profile = TravelerProfile {
        user_id: "persona_user".to_string(),
        vibe: estimate(&persona),
        budget_tier: classify_budget(persona.budget.as_str()),
        group_tier: classify_group(persona.companions),
        persona: Some(persona),
        created_at: Utc::now(),
    };

    assert_eq!(profile.budget_tier, BudgetTier::Low);
    assert_eq!(profile.group_tier, GroupTier::Group);

    let store = MemoryProfileStore::new();
    store.save(&profile).await.unwrap();

    let catalog = MemoryCatalog::new(test_catalog());
    let destinations = catalog.list().await.unwrap();

    let recommender = Recommender::new(10, 50);
    let loaded = store.get("persona_user").await.unwrap();
    let result = recommender.recommend(&loaded, &destinations, None);

    // Only party-island matches low/group; the social persona scores it high.
    assert_eq!(result.total_matches, 1);
    assert_eq!(result.scored[0].place_id, "party-island");
    assert!(result.scored[0].score > 80, "expected a strong match, got {}", result.scored[0].score);
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let store = MemoryProfileStore::new();
    let err = store.get("nobody").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn test_all_mode_rescues_filtered_out_users() {
    // Tier combination with zero catalog matches.
    let profile = TravelerProfile {
        user_id: "mismatched_user".to_string(),
        vibe: PreferenceVector::new(9, 8, 2, 2),
        budget_tier: BudgetTier::High,
        group_tier: GroupTier::Group,
        persona: None,
        created_at: Utc::now(),
    };

    let store = MemoryProfileStore::new();
    store.save(&profile).await.unwrap();

    let catalog = MemoryCatalog::new(test_catalog());
    let destinations = catalog.list().await.unwrap();
    let recommender = Recommender::new(10, 50);

    let filtered = recommender.recommend(&profile, &destinations, None);
    assert_eq!(filtered.total_matches, 0);
    assert!(filtered.scored.is_empty());

    let all = recommender.recommend_all(&profile, &destinations);
    assert_eq!(all.total_matches, test_catalog().len());
    assert!(all.scored.len() >= filtered.scored.len());

    // Unfiltered mode still ranks by vibe: the calm lakes fit this calm user
    // best, and they are a perfect match.
    assert_eq!(all.scored[0].place_id, "calm-lakes");
    assert_eq!(all.scored[0].score, 100);
}

#[tokio::test]
async fn test_limit_bounds_result_length() {
    let profile = TravelerProfile {
        user_id: "bounded_user".to_string(),
        vibe: PreferenceVector::neutral(),
        budget_tier: BudgetTier::Low,
        group_tier: GroupTier::Solo,
        persona: None,
        created_at: Utc::now(),
    };

    let destinations: Vec<Destination> = (0..30)
        .map(|i| {
            destination(
                &format!("p{}", i),
                PreferenceVector::new((i % 11) as u8, 5, 5, 5),
                BudgetTier::Low,
                GroupTier::Solo,
            )
        })
        .collect();

    let recommender = Recommender::new(10, 50);

    let default_limit = recommender.recommend(&profile, &destinations, None);
    assert_eq!(default_limit.scored.len(), 10);
    assert_eq!(default_limit.total_matches, 30);

    let capped = recommender.recommend(&profile, &destinations, Some(500));
    assert_eq!(capped.scored.len(), 30.min(50));

    let exact = recommender.recommend(&profile, &destinations, Some(3));
    assert_eq!(exact.scored.len(), 3);
}

#[test]
fn test_score_range_over_the_full_catalog() {
    let recommender = Recommender::new(10, 50);
    let profile = TravelerProfile {
        user_id: "range_user".to_string(),
        vibe: PreferenceVector::new(3, 7, 1, 9),
        budget_tier: BudgetTier::Medium,
        group_tier: GroupTier::Solo,
        persona: None,
        created_at: Utc::now(),
    };

    let result = recommender.recommend_all(&profile, &test_catalog());

    assert_eq!(result.scored.len(), test_catalog().len());
    for scored in &result.scored {
        assert!(scored.score <= 100, "score {} out of range", scored.score);
        assert!(scored.vibe_compatibility.lowkey <= 10);
        assert!(scored.vibe_compatibility.nature <= 10);
        assert!(scored.vibe_compatibility.crowds <= 10);
        assert!(scored.vibe_compatibility.social <= 10);
    }
}
