use crate::models::{PreferenceVector, VibeBreakdown, VibeScore};

/// Compute the compatibility between two vibe vectors.
///
/// Per dimension, `diff = |a - b|` (0-10). The score is
/// `round(100 - mean(diffs) * 10)`, rounded half away from zero, which the
/// integer form `(1005 - 25 * sum) / 10` computes exactly for
/// `sum = diff_lowkey + diff_nature + diff_crowds + diff_social` in [0, 40].
///
/// The result is symmetric in its arguments, 100 for identical vectors, and
/// never increases when any single diff grows.
pub fn score_vibes(a: &PreferenceVector, b: &PreferenceVector) -> VibeScore {
    let breakdown = VibeBreakdown {
        lowkey: a.lowkey.abs_diff(b.lowkey),
        nature: a.nature.abs_diff(b.nature),
        crowds: a.crowds.abs_diff(b.crowds),
        social: a.social.abs_diff(b.social),
    };

    let sum = breakdown.lowkey as u32
        + breakdown.nature as u32
        + breakdown.crowds as u32
        + breakdown.social as u32;

    let score = ((1005 - 25 * sum) / 10).min(100) as u8;

    VibeScore { score, breakdown }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectors() -> Vec<PreferenceVector> {
        vec![
            PreferenceVector::new(0, 0, 0, 0),
            PreferenceVector::new(10, 10, 10, 10),
            PreferenceVector::new(8, 9, 2, 3),
            PreferenceVector::new(5, 5, 5, 5),
            PreferenceVector::new(2, 7, 10, 0),
            PreferenceVector::new(1, 3, 6, 9),
        ]
    }

    #[test]
    fn test_identical_vectors_score_100() {
        for v in vectors() {
            let result = score_vibes(&v, &v);
            assert_eq!(result.score, 100);
            assert_eq!(result.breakdown, VibeBreakdown { lowkey: 0, nature: 0, crowds: 0, social: 0 });
        }
    }

    #[test]
    fn test_scoring_is_symmetric() {
        let vs = vectors();
        for a in &vs {
            for b in &vs {
                assert_eq!(score_vibes(a, b), score_vibes(b, a));
            }
        }
    }

    #[test]
    fn test_known_score() {
        let a = PreferenceVector::new(8, 9, 2, 3);
        let b = PreferenceVector::new(8, 9, 4, 5);

        let result = score_vibes(&a, &b);
        // diffs (0, 0, 2, 2), avg 1.0 -> 90
        assert_eq!(result.score, 90);
        assert_eq!(result.breakdown, VibeBreakdown { lowkey: 0, nature: 0, crowds: 2, social: 2 });
    }

    #[test]
    fn test_maximal_distance_scores_zero() {
        let a = PreferenceVector::new(0, 0, 0, 0);
        let b = PreferenceVector::new(10, 10, 10, 10);

        let result = score_vibes(&a, &b);
        assert_eq!(result.score, 0);
        assert_eq!(result.breakdown, VibeBreakdown { lowkey: 10, nature: 10, crowds: 10, social: 10 });
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        // diffs (1, 0, 0, 0): 100 - 2.5 = 97.5 -> 98
        let a = PreferenceVector::new(5, 5, 5, 5);
        let b = PreferenceVector::new(6, 5, 5, 5);
        assert_eq!(score_vibes(&a, &b).score, 98);

        // diffs (1, 1, 1, 0): 100 - 7.5 = 92.5 -> 93
        let c = PreferenceVector::new(6, 6, 6, 5);
        assert_eq!(score_vibes(&a, &c).score, 93);
    }

    #[test]
    fn test_score_never_increases_as_a_diff_grows() {
        let base = PreferenceVector::new(5, 5, 5, 5);

        let mut previous = 100;
        for social in 5..=10 {
            let other = PreferenceVector::new(5, 5, 5, social);
            let score = score_vibes(&base, &other).score;
            assert!(score <= previous, "score went up as the social diff grew");
            previous = score;
        }
    }

    #[test]
    fn test_score_and_breakdown_stay_in_range() {
        let vs = vectors();
        for a in &vs {
            for b in &vs {
                let result = score_vibes(a, b);
                assert!(result.score <= 100);
                assert!(result.breakdown.lowkey <= 10);
                assert!(result.breakdown.nature <= 10);
                assert!(result.breakdown.crowds <= 10);
                assert!(result.breakdown.social <= 10);
            }
        }
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let a = PreferenceVector::new(2, 7, 10, 0);
        let b = PreferenceVector::new(8, 9, 2, 3);
        assert_eq!(score_vibes(&a, &b), score_vibes(&a, &b));
    }
}
