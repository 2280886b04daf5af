//! Form to result handoff.
//!
//! The form hands the result view five values: the dominant trait code under
//! `type` and one score per trait under `D`, `I`, `S` and `C`. The payload is a
//! plain key/value map so any transport works (URL query string, JSON, an
//! in-memory value). The receiving side treats it as untrusted input; see
//! [`crate::result::parse_result_state`].

use crate::core::{DiscTrait, ScoreTally};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key carrying the dominant trait code.
pub const TYPE_KEY: &str = "type";

/// Immutable snapshot handed from the form to the result view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultState {
    pub dominant: DiscTrait,
    pub scores: ScoreTally,
}

impl ResultState {
    pub fn new(dominant: DiscTrait, scores: ScoreTally) -> Self {
        Self { dominant, scores }
    }

    /// Snapshot with the dominant trait derived from the scores.
    pub fn from_scores(scores: ScoreTally) -> Self {
        Self::new(scores.dominant(), scores)
    }

    pub fn to_payload(&self) -> ResultPayload {
        ResultPayload::from(self)
    }
}

/// Serialisable key/value handoff payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultPayload {
    entries: BTreeMap<String, String>,
}

impl ResultPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Encode as `type=D&D=20&I=15&S=10&C=5`, percent-encoding keys and values.
    ///
    /// Known keys come first in handoff order; anything else follows sorted.
    pub fn to_query_string(&self) -> String {
        let known = std::iter::once(TYPE_KEY).chain(DiscTrait::ALL.iter().map(|t| t.code()));
        let mut parts: Vec<String> = known
            .filter_map(|key| self.get(key).map(|value| encode_pair(key, value)))
            .collect();
        parts.extend(
            self.entries
                .iter()
                .filter(|(key, _)| !is_known_key(key))
                .map(|(key, value)| encode_pair(key, value)),
        );
        parts.join("&")
    }

    /// Decode a query string the way a browser reads `location.search`.
    ///
    /// A leading `?` is ignored, `+` means space, percent escapes are decoded
    /// (invalid UTF-8 becomes U+FFFD), pairs without `=` get an empty value and
    /// later duplicates replace earlier ones.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut payload = Self::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            payload.insert(decode_component(key), decode_component(value));
        }
        payload
    }
}

fn encode_pair(key: &str, value: &str) -> String {
    format!(
        "{}={}",
        urlencoding::encode(key),
        urlencoding::encode(value)
    )
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

fn is_known_key(key: &str) -> bool {
    key == TYPE_KEY || DiscTrait::from_code(key).is_some()
}

impl From<&ResultState> for ResultPayload {
    fn from(state: &ResultState) -> Self {
        state.scores.iter().fold(
            ResultPayload::new().with(TYPE_KEY, state.dominant.code()),
            |payload, (t, score)| payload.with(t.code(), score.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_state_encodes_to_query_in_handoff_order() {
        let state = ResultState::new(DiscTrait::D, ScoreTally::new(20, 15, 10, 5));
        assert_eq!(state.to_payload().to_query_string(), "type=D&D=20&I=15&S=10&C=5");
    }

    #[test]
    fn test_from_query_string_tolerates_leading_question_mark() {
        let payload = ResultPayload::from_query_string("?type=S&D=12&I=8&S=15&C=5");
        assert_eq!(payload.get("type"), Some("S"));
        assert_eq!(payload.get("S"), Some("15"));
    }

    #[test]
    fn test_from_query_string_handles_bare_keys_and_duplicates() {
        let payload = ResultPayload::from_query_string("D=1&D=7&type&&I=");
        assert_eq!(payload.get("D"), Some("7"));
        assert_eq!(payload.get("type"), Some(""));
        assert_eq!(payload.get("I"), Some(""));
        assert_eq!(payload.get("C"), None);
    }

    #[test]
    fn test_from_query_string_percent_decodes_keys_and_values() {
        let payload = ResultPayload::from_query_string("type=%49&D=2%30&%53=7&note=a+b%20c");
        assert_eq!(payload.get("type"), Some("I"));
        assert_eq!(payload.get("D"), Some("20"));
        assert_eq!(payload.get("S"), Some("7"));
        assert_eq!(payload.get("note"), Some("a b c"));
    }

    #[test]
    fn test_malformed_escapes_are_kept_literally() {
        let payload = ResultPayload::from_query_string("D=%zz&I=%E2");
        assert_eq!(payload.get("D"), Some("%zz"));
        assert_eq!(payload.get("I"), Some("\u{FFFD}"));
    }

    #[test]
    fn test_to_query_string_percent_encodes_values() {
        let payload = ResultPayload::new().with("type", "D").with("note", "a b&c");
        let query = payload.to_query_string();
        assert_eq!(query, "type=D&note=a%20b%26c");
        assert_eq!(ResultPayload::from_query_string(&query), payload);
    }

    #[test]
    fn test_unknown_keys_are_kept_after_known_ones() {
        let payload = ResultPayload::new().with("utm", "x").with("D", "3");
        assert_eq!(payload.to_query_string(), "D=3&utm=x");
    }

    #[test]
    fn test_payload_serializes_as_flat_json_object() {
        let state = ResultState::new(DiscTrait::I, ScoreTally::new(1, 2, 3, 4));
        let json = serde_json::to_value(state.to_payload()).unwrap();
        assert_eq!(json["type"], "I");
        assert_eq!(json["C"], "4");
    }

    #[test]
    fn test_from_scores_uses_tie_break() {
        let state = ResultState::from_scores(ScoreTally::new(10, 10, 5, 5));
        assert_eq!(state.dominant, DiscTrait::D);
    }
}
