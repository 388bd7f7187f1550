//! Ranked hybrid matching
//!
//! Combines exact, substring, phonetic and edit-distance signals into one
//! ranked candidate list. Tiers are tried in a fixed priority order per
//! option and the first hit wins, so every option appears at most once.

use serde::Serialize;

use super::levenshtein::{adaptive_threshold, levenshtein};
use super::phonetic::soundex;

/// How a candidate was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Fuzzy,
    Phonetic,
    Contains,
}

impl MatchType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Fuzzy => "fuzzy",
            MatchType::Phonetic => "phonetic",
            MatchType::Contains => "contains",
        }
    }
}

/// A ranked candidate produced by [`hybrid_match`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// The matched option, original casing preserved
    pub matched: String,
    /// Confidence score, 0-100
    pub confidence: u8,
    /// Which signal produced the match
    pub match_type: MatchType,
}

/// Precomputed input-side state shared by all tiers.
struct TierInput {
    lower: String,
    code: String,
    threshold: usize,
}

/// One match tier: scores a single option or passes.
type Tier = fn(&TierInput, &str, u8) -> Option<(u8, MatchType)>;

fn exact_tier(input: &TierInput, option_lower: &str, _min_confidence: u8) -> Option<(u8, MatchType)> {
    (input.lower == option_lower).then_some((100, MatchType::Exact))
}

fn contains_tier(input: &TierInput, option_lower: &str, _min_confidence: u8) -> Option<(u8, MatchType)> {
    let input_len = input.lower.chars().count();
    let option_len = option_lower.chars().count();
    let max_len = input_len.max(option_len);
    if max_len == 0 {
        return None;
    }
    if input.lower.contains(option_lower) || option_lower.contains(&input.lower) {
        let min_len = input_len.min(option_len);
        let confidence = (90.0 * min_len as f64 / max_len as f64).round() as u8;
        return Some((confidence, MatchType::Fuzzy));
    }
    None
}

fn phonetic_tier(input: &TierInput, option_lower: &str, _min_confidence: u8) -> Option<(u8, MatchType)> {
    if input.code.is_empty() {
        return None;
    }
    (input.code == soundex(option_lower)).then_some((85, MatchType::Phonetic))
}

fn edit_distance_tier(input: &TierInput, option_lower: &str, min_confidence: u8) -> Option<(u8, MatchType)> {
    let distance = levenshtein(&input.lower, option_lower);
    if distance > input.threshold {
        return None;
    }
    let confidence = if input.threshold == 0 {
        100
    } else {
        ((1.0 - distance as f64 / input.threshold as f64) * 100.0).round() as u8
    };
    (confidence >= min_confidence).then_some((confidence, MatchType::Fuzzy))
}

// Priority order: first hit wins per option
const TIERS: [Tier; 4] = [exact_tier, contains_tier, phonetic_tier, edit_distance_tier];

/// Match `input` against `options` using all signals, ranked by confidence.
///
/// Per option, the tiers run in priority order and the first hit wins:
/// 1. case-insensitive equality (100, exact);
/// 2. substring containment either direction
///    (`round(90 * min_len/max_len)`, fuzzy);
/// 3. phonetic code equality (85, phonetic);
/// 4. edit distance within the adaptive threshold, scored
///    `round((1 - d/t) * 100)` and gated on `min_confidence` (fuzzy).
///
/// Only the edit-distance tier is gated on `min_confidence`; a substring
/// match below the bar is still returned, and callers that need a hard
/// floor apply it to the ranked output. Options that hit no tier are
/// omitted. The result is stable-sorted descending by confidence.
///
/// # Examples
/// ```
/// use inventory_fuzzy::{hybrid_match, MatchType};
/// let options = ["Abdul Karim".to_string(), "Rahman".to_string()];
/// let results = hybrid_match("karim", &options, 60);
/// assert_eq!(results[0].matched, "Abdul Karim");
/// assert_eq!(results[0].confidence, 41); // round(90 * 5/11)
/// assert_eq!(results[0].match_type, MatchType::Fuzzy);
/// ```
#[must_use]
pub fn hybrid_match(input: &str, options: &[String], min_confidence: u8) -> Vec<MatchResult> {
    let lower = input.to_lowercase();
    let tier_input = TierInput {
        code: soundex(&lower),
        threshold: adaptive_threshold(input),
        lower,
    };

    let mut results: Vec<MatchResult> = options
        .iter()
        .filter_map(|option| {
            let option_lower = option.to_lowercase();
            TIERS.iter().find_map(|tier| {
                tier(&tier_input, &option_lower, min_confidence).map(|(confidence, match_type)| {
                    MatchResult {
                        matched: option.clone(),
                        confidence,
                        match_type,
                    }
                })
            })
        })
        .collect();

    results.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_beats_everything() {
        let options = opts(&["Karim", "Kareem"]);
        let results = hybrid_match("karim", &options, 60);
        assert_eq!(results[0].matched, "Karim");
        assert_eq!(results[0].confidence, 100);
        assert_eq!(results[0].match_type, MatchType::Exact);
    }

    #[test]
    fn test_contains_scores_by_length_ratio() {
        let options = opts(&["Abdul Karim", "Rahman"]);
        let results = hybrid_match("karim", &options, 60);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].matched, "Abdul Karim");
        assert_eq!(results[0].confidence, 41); // round(90 * 5/11)
        assert_eq!(results[0].match_type, MatchType::Fuzzy);
    }

    #[test]
    fn test_phonetic_match_is_fixed_85() {
        // "smith" and "Smyth" share a phonetic code but are neither equal
        // nor substrings of one another
        let options = opts(&["Smyth"]);
        let results = hybrid_match("smith", &options, 60);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].confidence, 85);
        assert_eq!(results[0].match_type, MatchType::Phonetic);
    }

    #[test]
    fn test_edit_distance_tier_respects_min_confidence() {
        // "carim" -> "karim": distance 1, threshold 2, confidence 50;
        // phonetically distinct (C650 vs K650)
        let options = opts(&["karim"]);
        assert!(hybrid_match("carim", &options, 60).is_empty());

        let results = hybrid_match("carim", &options, 0);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].confidence, 50);
        assert_eq!(results[0].match_type, MatchType::Fuzzy);
    }

    #[test]
    fn test_each_option_appears_once() {
        // "Karim" would hit exact, contains and phonetic; only exact fires
        let options = opts(&["Karim"]);
        let results = hybrid_match("KARIM", &options, 0);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_type, MatchType::Exact);
    }

    #[test]
    fn test_results_sorted_by_confidence() {
        let options = opts(&["Abdul Karim", "Kareem"]);
        let results = hybrid_match("karim", &options, 0);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].matched, "Kareem"); // phonetic, 85
        assert_eq!(results[1].matched, "Abdul Karim"); // contains, 41
    }

    #[test]
    fn test_no_signal_means_omitted() {
        let options = opts(&["Rahman", "Wilson"]);
        assert!(hybrid_match("karim", &options, 0).is_empty());
    }

    #[test]
    fn test_match_type_strings() {
        assert_eq!(MatchType::Exact.as_str(), "exact");
        assert_eq!(MatchType::Contains.as_str(), "contains");
        assert_eq!(
            serde_json::to_string(&MatchType::Phonetic).unwrap(),
            "\"phonetic\""
        );
    }
}
