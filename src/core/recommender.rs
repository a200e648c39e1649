use crate::core::scoring::score_vibes;
use crate::models::{Destination, ScoredPlace, TravelerProfile};

/// Result of a recommendation pass.
#[derive(Debug)]
pub struct Recommendations {
    pub scored: Vec<ScoredPlace>,
    /// Retained-candidate count before truncation.
    pub total_matches: usize,
}

/// Scores a catalog of destinations against a traveler profile.
///
/// # Pipeline
/// 1. Optional tier pre-filter (budget and group tier must both match)
/// 2. Vibe scoring per retained destination
/// 3. Stable descending sort by score
/// 4. Truncation to the requested limit
#[derive(Debug, Clone, Copy)]
pub struct Recommender {
    default_limit: usize,
    max_limit: usize,
}

impl Recommender {
    pub fn new(default_limit: usize, max_limit: usize) -> Self {
        Self { default_limit, max_limit }
    }

    /// Resolve a caller-supplied limit against the configured default and cap.
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }

    /// Tier-filtered top-N recommendations, the standard serving path.
    pub fn recommend(
        &self,
        profile: &TravelerProfile,
        catalog: &[Destination],
        requested_limit: Option<usize>,
    ) -> Recommendations {
        self.rank(profile, catalog, Some(self.effective_limit(requested_limit)), true)
    }

    /// Every destination scored, unfiltered and untruncated. Used by the
    /// all-scores debugging endpoint.
    pub fn recommend_all(
        &self,
        profile: &TravelerProfile,
        catalog: &[Destination],
    ) -> Recommendations {
        self.rank(profile, catalog, None, false)
    }

    /// The full ranking pass.
    ///
    /// A `limit` of `None` disables truncation; `Some(n)` truncates exactly
    /// to `n`, including `0` and values beyond the result count. Ties in
    /// score keep catalog iteration order: the sort is stable and compares
    /// on score alone.
    pub fn rank(
        &self,
        profile: &TravelerProfile,
        catalog: &[Destination],
        limit: Option<usize>,
        filter_by_tier: bool,
    ) -> Recommendations {
        let mut scored: Vec<ScoredPlace> = catalog
            .iter()
            .filter(|place| {
                !filter_by_tier
                    || (place.budget_tier == profile.budget_tier
                        && place.group_tier == profile.group_tier)
            })
            .map(|place| {
                let result = score_vibes(&profile.vibe, &place.vibe);

                ScoredPlace {
                    place_id: place.place_id.clone(),
                    place_name: place.name.clone(),
                    region: place.region.clone(),
                    description: place.description.clone(),
                    score: result.score,
                    vibe_compatibility: result.breakdown,
                }
            })
            .collect();

        let total_matches = scored.len();

        scored.sort_by(|a, b| b.score.cmp(&a.score));

        if let Some(limit) = limit {
            scored.truncate(limit);
        }

        Recommendations { scored, total_matches }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(10, 50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetTier, GroupTier, PreferenceVector};
    use chrono::Utc;

    fn profile(vibe: PreferenceVector) -> TravelerProfile {
        TravelerProfile {
            user_id: "traveler_1".to_string(),
            vibe,
            budget_tier: BudgetTier::Medium,
            group_tier: GroupTier::Couple,
            persona: None,
            created_at: Utc::now(),
        }
    }

    fn place(
        id: &str,
        vibe: PreferenceVector,
        budget_tier: BudgetTier,
        group_tier: GroupTier,
    ) -> Destination {
        Destination {
            place_id: id.to_string(),
            name: format!("Place {}", id),
            region: "Test Region".to_string(),
            description: "A place for tests".to_string(),
            vibe,
            budget_tier,
            group_tier,
        }
    }

    fn catalog() -> Vec<Destination> {
        vec![
            place("1", PreferenceVector::new(8, 9, 2, 3), BudgetTier::Medium, GroupTier::Couple),
            place("2", PreferenceVector::new(5, 5, 5, 5), BudgetTier::Medium, GroupTier::Couple),
            place("3", PreferenceVector::new(2, 3, 8, 8), BudgetTier::Medium, GroupTier::Couple),
            place("4", PreferenceVector::new(8, 9, 2, 3), BudgetTier::High, GroupTier::Couple),
            place("5", PreferenceVector::new(8, 9, 2, 3), BudgetTier::Medium, GroupTier::Group),
        ]
    }

    #[test]
    fn test_tier_filter_keeps_exact_matches_only() {
        let recommender = Recommender::default();
        let user = profile(PreferenceVector::new(8, 9, 2, 3));

        let result = recommender.recommend(&user, &catalog(), None);

        assert_eq!(result.total_matches, 3);
        let ids: Vec<&str> = result.scored.iter().map(|p| p.place_id.as_str()).collect();
        assert!(!ids.contains(&"4"), "budget tier mismatch must be filtered");
        assert!(!ids.contains(&"5"), "group tier mismatch must be filtered");
    }

    #[test]
    fn test_sorted_descending_with_best_first() {
        let recommender = Recommender::default();
        let user = profile(PreferenceVector::new(8, 9, 2, 3));

        let result = recommender.recommend(&user, &catalog(), None);

        assert_eq!(result.scored[0].place_id, "1");
        assert_eq!(result.scored[0].score, 100);
        for pair in result.scored.windows(2) {
            assert!(pair[0].score >= pair[1].score, "results not sorted by score");
        }
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let recommender = Recommender::default();
        let user = profile(PreferenceVector::new(5, 5, 5, 5));

        // Two identical destinations tie exactly; first-seen order wins.
        let places = vec![
            place("a", PreferenceVector::new(7, 7, 7, 7), BudgetTier::Medium, GroupTier::Couple),
            place("b", PreferenceVector::new(7, 7, 7, 7), BudgetTier::Medium, GroupTier::Couple),
            place("c", PreferenceVector::new(5, 5, 5, 5), BudgetTier::Medium, GroupTier::Couple),
        ];

        let result = recommender.recommend(&user, &places, None);
        let ids: Vec<&str> = result.scored.iter().map(|p| p.place_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_limit_truncates_exactly() {
        let recommender = Recommender::default();
        let user = profile(PreferenceVector::new(8, 9, 2, 3));

        let top_two = recommender.rank(&user, &catalog(), Some(2), true);
        assert_eq!(top_two.scored.len(), 2);
        assert_eq!(top_two.total_matches, 3);

        let none = recommender.rank(&user, &catalog(), Some(0), true);
        assert!(none.scored.is_empty());
        assert_eq!(none.total_matches, 3);

        let beyond = recommender.rank(&user, &catalog(), Some(100), true);
        assert_eq!(beyond.scored.len(), 3);
    }

    #[test]
    fn test_effective_limit_defaults_and_caps() {
        let recommender = Recommender::new(10, 50);
        assert_eq!(recommender.effective_limit(None), 10);
        assert_eq!(recommender.effective_limit(Some(25)), 25);
        assert_eq!(recommender.effective_limit(Some(500)), 50);
        assert_eq!(recommender.effective_limit(Some(0)), 0);
    }

    #[test]
    fn test_all_scores_mode_is_a_superset_of_filtered() {
        let recommender = Recommender::default();
        // This user's tiers match nothing in the catalog.
        let mut user = profile(PreferenceVector::new(8, 9, 2, 3));
        user.budget_tier = BudgetTier::Low;
        user.group_tier = GroupTier::Solo;

        let filtered = recommender.recommend(&user, &catalog(), None);
        let all = recommender.recommend_all(&user, &catalog());

        assert_eq!(filtered.total_matches, 0);
        assert!(filtered.scored.is_empty());
        assert_eq!(all.total_matches, catalog().len());
        assert!(all.scored.len() >= filtered.scored.len());
    }

    #[test]
    fn test_empty_catalog() {
        let recommender = Recommender::default();
        let user = profile(PreferenceVector::neutral());

        let result = recommender.recommend(&user, &[], None);
        assert!(result.scored.is_empty());
        assert_eq!(result.total_matches, 0);
    }
}
