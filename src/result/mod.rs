//! Result view: rebuild display data from a handoff payload.
//!
//! Nothing here can fail. Missing or malformed scores default to zero and a
//! missing or unknown trait code is replaced by the highest-scoring trait.
//! A valid trait code is trusted as-is, even when the scores point
//! elsewhere; the side highlight is the only place that follows the scores.

use crate::core::{DiscTrait, ScoreTally};
use crate::handoff::{ResultPayload, ResultState, TYPE_KEY};
use crate::profiles::{profile, TraitProfile};
use crate::scoring::ranked_traits;
use serde::Serialize;
use tracing::warn;

pub use crate::scoring::compute_percentage;

/// One percentage bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraitBar {
    #[serde(rename = "trait")]
    pub disc_trait: DiscTrait,
    pub label: &'static str,
    pub score: u32,
    pub percent: u32,
}

impl TraitBar {
    fn new(disc_trait: DiscTrait, score: u32) -> Self {
        Self {
            disc_trait,
            label: profile(disc_trait).title,
            score,
            percent: compute_percentage(score),
        }
    }
}

/// Everything the presentation layer needs to draw a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub dominant: DiscTrait,
    pub profile: TraitProfile,
    /// All four traits in D, I, S, C order.
    pub bars: Vec<TraitBar>,
    /// Top-scoring trait by the scores alone.
    pub highlight: TraitBar,
}

/// Read the handoff payload, defaulting anything missing or malformed.
pub fn parse_result_state(payload: &ResultPayload) -> ResultState {
    let mut scores = ScoreTally::default();
    for t in DiscTrait::ALL {
        scores.add(t, parse_score(t, payload.get(t.code())));
    }

    let dominant = match payload.get(TYPE_KEY).and_then(DiscTrait::from_code) {
        Some(code) => code,
        None => {
            let derived = scores.dominant();
            warn!(
                supplied = payload.get(TYPE_KEY).unwrap_or("<missing>"),
                derived = %derived,
                "result trait code missing or invalid, derived from scores"
            );
            derived
        }
    };

    ResultState::new(dominant, scores)
}

/// Parse one score. Anything that is not a non-negative integer reads as 0.
///
/// Negative and fractional numbers are clamped to 0 on purpose: a handoff
/// score is a sum of whole ranks, so nothing outside that domain is carried
/// into the percentages.
fn parse_score(disc_trait: DiscTrait, raw: Option<&str>) -> u32 {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return 0;
    };

    if let Ok(score) = raw.parse::<u32>() {
        return score;
    }

    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= f64::from(u32::MAX) => {
            f as u32
        }
        _ => {
            warn!(trait_code = %disc_trait, raw, "malformed score, using 0");
            0
        }
    }
}

/// Build the display summary for a result.
pub fn render_summary(state: &ResultState) -> ResultSummary {
    let bars: Vec<TraitBar> = state
        .scores
        .iter()
        .map(|(t, score)| TraitBar::new(t, score))
        .collect();

    let (top, top_score) = ranked_traits(&state.scores)
        .into_iter()
        .next()
        .unwrap_or((state.dominant, 0));

    ResultSummary {
        dominant: state.dominant,
        profile: *profile(state.dominant),
        bars,
        highlight: TraitBar::new(top, top_score),
    }
}

/// Convenience for callers holding a raw query string.
pub fn summary_from_query(query: &str) -> ResultSummary {
    render_summary(&parse_result_state(&ResultPayload::from_query_string(query)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn payload(query: &str) -> ResultPayload {
        ResultPayload::from_query_string(query)
    }

    #[test]
    fn test_missing_type_derives_dominant_from_scores() {
        let state = parse_result_state(&payload("D=12&I=8&S=15&C=5"));
        assert_eq!(state.dominant, DiscTrait::S);
        assert_eq!(state.scores, ScoreTally::new(12, 8, 15, 5));
    }

    #[test]
    fn test_invalid_type_derives_dominant_from_scores() {
        let state = parse_result_state(&payload("type=X&D=12&I=8&S=15&C=5"));
        assert_eq!(state.dominant, DiscTrait::S);
    }

    #[test]
    fn test_valid_type_is_trusted_even_if_inconsistent() {
        let state = parse_result_state(&payload("type=C&D=20&I=0&S=0&C=0"));
        assert_eq!(state.dominant, DiscTrait::C);
    }

    #[test]
    fn test_percent_encoded_code_is_decoded_and_trusted() {
        let state = parse_result_state(&payload("type=%49&D=12&I=8&S=15&C=5"));
        assert_eq!(state.dominant, DiscTrait::I);
    }

    #[test]
    fn test_percent_encoded_score_is_decoded() {
        let state = parse_result_state(&payload("type=D&D=2%30&I=1%35&S=10&C=5"));
        assert_eq!(state.scores, ScoreTally::new(20, 15, 10, 5));
    }

    #[test]
    fn test_padded_code_is_invalid_and_recomputed() {
        let state = parse_result_state(&payload("type=%20D&D=1&I=2&S=9&C=3"));
        assert_eq!(state.dominant, DiscTrait::S);
    }

    #[test]
    fn test_all_zero_defaults_to_d() {
        let state = parse_result_state(&ResultPayload::new());
        assert_eq!(state.dominant, DiscTrait::D);
        assert_eq!(state.scores, ScoreTally::default());
    }

    #[test]
    fn test_malformed_scores_default_to_zero() {
        let state = parse_result_state(&payload("D=abc&I=-3&S=2.5&C=4.0"));
        assert_eq!(state.scores, ScoreTally::new(0, 0, 0, 4));
        assert_eq!(state.dominant, DiscTrait::C);
    }

    #[test]
    fn test_summary_bars_in_fixed_order() {
        let summary = render_summary(&ResultState::new(
            DiscTrait::D,
            ScoreTally::new(20, 15, 10, 5),
        ));
        let bars: Vec<(DiscTrait, u32)> =
            summary.bars.iter().map(|b| (b.disc_trait, b.percent)).collect();
        assert_eq!(
            bars,
            vec![
                (DiscTrait::D, 100),
                (DiscTrait::I, 75),
                (DiscTrait::S, 50),
                (DiscTrait::C, 25)
            ]
        );
        assert_eq!(summary.profile.name, "Dominance (D)");
        assert_eq!(summary.highlight.disc_trait, DiscTrait::D);
    }

    #[test]
    fn test_highlight_follows_scores_not_supplied_code() {
        let summary = summary_from_query("type=C&D=20&I=0&S=0&C=0");
        assert_eq!(summary.dominant, DiscTrait::C);
        assert_eq!(summary.profile.title, "Conscientious");
        assert_eq!(summary.highlight.disc_trait, DiscTrait::D);
        assert_eq!(summary.highlight.percent, 100);
    }

    #[test]
    fn test_summary_serializes_trait_key() {
        let summary = summary_from_query("");
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["dominant"], "D");
        assert_eq!(json["bars"][0]["trait"], "D");
        assert_eq!(json["bars"][3]["percent"], 0);
    }
}
