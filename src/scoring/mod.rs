//! Trait ranking and percentage calculation.

use crate::core::{DiscTrait, ScoreTally, MAX_POSSIBLE_SCORE};

/// Percentage of the maximum possible score, rounded half up.
///
/// Scores above [`MAX_POSSIBLE_SCORE`] are not clamped.
pub fn compute_percentage(score: u32) -> u32 {
    let ratio = f64::from(score) / f64::from(MAX_POSSIBLE_SCORE);
    (ratio * 100.0).round() as u32
}

/// Traits sorted by descending score. Equal scores keep the fixed
/// D, I, S, C order because the sort is stable.
pub fn ranked_traits(tally: &ScoreTally) -> Vec<(DiscTrait, u32)> {
    let mut entries: Vec<(DiscTrait, u32)> = tally.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

/// Highest-scoring trait, ties broken by the fixed priority D > I > S > C.
pub fn dominant_trait(tally: &ScoreTally) -> DiscTrait {
    let top_score = tally.iter().map(|(_, score)| score).max().unwrap_or(0);
    DiscTrait::ALL
        .into_iter()
        .find(|t| tally.get(*t) == top_score)
        .unwrap_or(DiscTrait::D)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_percentages_for_full_ladder() {
        let tally = ScoreTally::new(20, 15, 10, 5);
        let pcts: Vec<u32> = tally.percentages().iter().map(|(_, p)| *p).collect();
        assert_eq!(pcts, vec![100, 75, 50, 25]);
    }

    #[test]
    fn test_percentage_of_zero_is_zero() {
        assert_eq!(compute_percentage(0), 0);
    }

    #[test]
    fn test_tie_prefers_d_over_i() {
        let tally = ScoreTally::new(10, 10, 5, 5);
        assert_eq!(dominant_trait(&tally), DiscTrait::D);
    }

    #[test]
    fn test_tie_between_s_and_c_prefers_s() {
        let tally = ScoreTally::new(1, 2, 9, 9);
        assert_eq!(dominant_trait(&tally), DiscTrait::S);
    }

    #[test]
    fn test_all_zero_resolves_to_d() {
        assert_eq!(dominant_trait(&ScoreTally::default()), DiscTrait::D);
    }

    #[test]
    fn test_clear_winner() {
        let tally = ScoreTally::new(12, 8, 15, 5);
        assert_eq!(dominant_trait(&tally), DiscTrait::S);
    }

    #[test]
    fn test_ranked_traits_is_stable_on_ties() {
        let tally = ScoreTally::new(5, 9, 5, 9);
        let order: Vec<DiscTrait> = ranked_traits(&tally).into_iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec![DiscTrait::I, DiscTrait::C, DiscTrait::D, DiscTrait::S]);
    }

    proptest! {
        /// Property: the dominant trait always carries the maximum score and
        /// no earlier trait in the fixed order shares it.
        #[test]
        fn dominant_is_first_trait_with_max(
            d in 0u32..=20, i in 0u32..=20, s in 0u32..=20, c in 0u32..=20
        ) {
            let tally = ScoreTally::new(d, i, s, c);
            let dominant = dominant_trait(&tally);
            let max = d.max(i).max(s).max(c);
            prop_assert_eq!(tally.get(dominant), max);
            for earlier in DiscTrait::ALL.iter().take(dominant.index()) {
                prop_assert!(tally.get(*earlier) < max);
            }
        }

        /// Property: percentages are five times the score for in-range scores.
        #[test]
        fn percentage_is_linear_in_range(score in 0u32..=20) {
            prop_assert_eq!(compute_percentage(score), score * 5);
        }
    }
}
