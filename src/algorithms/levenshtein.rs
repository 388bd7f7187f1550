//! Levenshtein (edit) distance and threshold-based matching
//!
//! Single-row DP implementation, Unicode-aware (char-based). The matching
//! helpers layer an adaptive threshold and a 0-100 confidence score on top
//! of the raw distance.

use serde::Serialize;
use smallvec::SmallVec;

/// Compute the Levenshtein distance between two strings.
///
/// Minimum number of single-character insertions, deletions and
/// substitutions to transform `a` into `b`. Case-sensitive; callers that
/// want case-insensitive behavior lowercase both sides first (see
/// [`fuzzy_match`]).
///
/// # Complexity
/// - Time: O(m*n) where m and n are string lengths
/// - Space: O(min(m,n)) using single-row DP
///
/// # Examples
/// ```
/// use inventory_fuzzy::levenshtein;
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Keep the shorter string on the column axis
    let (target, source) = if m < n {
        (&a_chars[..], &b_chars[..])
    } else {
        (&b_chars[..], &a_chars[..])
    };
    let n_target = target.len();

    let mut row: SmallVec<[usize; 64]> = (0..=n_target).collect();

    for (i, &sc) in source.iter().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;

        for j in 0..n_target {
            let cost = if sc == target[j] { 0 } else { 1 };
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;
            let substitution = prev + cost;

            prev = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    row[n_target]
}

/// Normalized Levenshtein similarity (0.0 to 1.0).
///
/// `1 - distance / max_len`; two empty strings are identical (1.0).
#[inline]
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let dist = levenshtein(a, b);
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        1.0
    } else {
        1.0 - (dist as f64 / max_len as f64)
    }
}

/// Case-insensitive threshold check: distance between `input` and `target`
/// is at most `threshold`.
///
/// # Examples
/// ```
/// use inventory_fuzzy::fuzzy_match;
/// assert!(fuzzy_match("Jhon", "john", 2));
/// assert!(!fuzzy_match("Bob", "john", 2));
/// ```
#[must_use]
pub fn fuzzy_match(input: &str, target: &str, threshold: usize) -> bool {
    levenshtein(&input.to_lowercase(), &target.to_lowercase()) <= threshold
}

/// Per-input edit-distance budget: `min(3, ceil(0.3 * len))`.
///
/// Short inputs tolerate proportionally fewer edits; the budget is capped
/// at 3 regardless of length.
#[inline]
#[must_use]
pub fn adaptive_threshold(input: &str) -> usize {
    let len = input.chars().count();
    ((0.3 * len as f64).ceil() as usize).min(3)
}

/// Convert an edit distance into a 0-100 confidence score.
///
/// `round((1 - distance/threshold) * 100)`. A zero threshold only admits a
/// zero distance, which scores 100.
fn distance_confidence(distance: usize, threshold: usize) -> u8 {
    if threshold == 0 {
        return 100;
    }
    ((1.0 - distance as f64 / threshold as f64) * 100.0).round() as u8
}

/// A candidate accepted by [`find_best_match`] or [`find_all_matches`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMatch {
    /// The option, as given (original casing preserved)
    pub matched: String,
    /// Confidence score, 0-100
    pub confidence: u8,
}

/// Find the single closest option within the adaptive edit-distance budget.
///
/// Distances are computed case-insensitively. Ties keep the first-seen
/// option (stable scan, no re-sorting). Returns `None` when no option is
/// within budget.
///
/// # Examples
/// ```
/// use inventory_fuzzy::find_best_match;
/// let options = ["John".to_string(), "Jane".to_string(), "Bob".to_string()];
/// let best = find_best_match("Jhon", &options).unwrap();
/// assert_eq!(best.matched, "John");
/// ```
#[must_use]
pub fn find_best_match(input: &str, options: &[String]) -> Option<BestMatch> {
    let threshold = adaptive_threshold(input);
    let input_lower = input.to_lowercase();

    let mut best: Option<(usize, &String)> = None;
    for option in options {
        let distance = levenshtein(&input_lower, &option.to_lowercase());
        if distance > threshold {
            continue;
        }
        // Strict comparison keeps the first-seen option on ties
        if best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, option));
        }
    }

    best.map(|(distance, option)| BestMatch {
        matched: option.clone(),
        confidence: distance_confidence(distance, threshold),
    })
}

/// Find every option within the adaptive budget scoring at least
/// `min_confidence`, sorted descending by confidence.
///
/// The sort is stable: equal confidences retain input order.
#[must_use]
pub fn find_all_matches(input: &str, options: &[String], min_confidence: u8) -> Vec<BestMatch> {
    let threshold = adaptive_threshold(input);
    let input_lower = input.to_lowercase();

    let mut matches: Vec<BestMatch> = options
        .iter()
        .filter_map(|option| {
            let distance = levenshtein(&input_lower, &option.to_lowercase());
            if distance > threshold {
                return None;
            }
            let confidence = distance_confidence(distance, threshold);
            (confidence >= min_confidence).then(|| BestMatch {
                matched: option.clone(),
                confidence,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("saturday", "sunday"), 3);
    }

    #[test]
    fn test_levenshtein_symmetry() {
        let pairs = [("karim", "kareem"), ("mohammad", "muhammad"), ("a", "")];
        for (a, b) in pairs {
            assert_eq!(levenshtein(a, b), levenshtein(b, a));
        }
    }

    #[test]
    fn test_levenshtein_unicode() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("日本語", "日本"), 1);
    }

    #[test]
    fn test_levenshtein_similarity() {
        assert_eq!(levenshtein_similarity("", ""), 1.0);
        assert_eq!(levenshtein_similarity("abc", "abc"), 1.0);
        assert!((levenshtein_similarity("karim", "kareem") - (1.0 - 2.0 / 6.0)).abs() < 1e-9);
    }

    #[test]
    fn test_fuzzy_match_case_insensitive() {
        assert!(fuzzy_match("KARIM", "karim", 0));
        assert!(fuzzy_match("Jhon", "JOHN", 2));
        assert!(!fuzzy_match("Bob", "john", 2));
    }

    #[test]
    fn test_adaptive_threshold() {
        assert_eq!(adaptive_threshold(""), 0);
        assert_eq!(adaptive_threshold("abc"), 1); // ceil(0.9)
        assert_eq!(adaptive_threshold("jhon"), 2); // ceil(1.2)
        assert_eq!(adaptive_threshold("mohammad"), 3); // ceil(2.4)
        assert_eq!(adaptive_threshold("abcdefghijklmnop"), 3); // capped
    }

    #[test]
    fn test_find_best_match() {
        let options = opts(&["John", "Jane", "Bob"]);
        let best = find_best_match("Jhon", &options).unwrap();
        // "jhon" -> "john" is a transposition: two substitutions, exactly
        // the budget for a 4-char input, so it matches at confidence 0
        assert_eq!(best.matched, "John");
        assert_eq!(best.confidence, 0);
    }

    #[test]
    fn test_find_best_match_none() {
        let options = opts(&["Alexander", "Christopher"]);
        assert_eq!(find_best_match("zq", &options), None);
    }

    #[test]
    fn test_find_best_match_tie_keeps_first() {
        // Both options are distance 1 from the input; first one wins
        let options = opts(&["cat", "car"]);
        let best = find_best_match("caw", &options).unwrap();
        assert_eq!(best.matched, "cat");
    }

    #[test]
    fn test_find_best_match_empty_input() {
        // Zero budget: only a zero-distance option qualifies
        let options = opts(&["a"]);
        assert_eq!(find_best_match("", &options), None);

        let options = opts(&[""]);
        let best = find_best_match("", &options).unwrap();
        assert_eq!(best.confidence, 100);
    }

    #[test]
    fn test_find_all_matches_sorted_descending() {
        // input "karim" (threshold 2): "karim" d=0 conf=100, "karin" d=1 conf=50
        let options = opts(&["karin", "karim", "rahman"]);
        let all = find_all_matches("karim", &options, 0);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].matched, "karim");
        assert_eq!(all[0].confidence, 100);
        assert_eq!(all[1].matched, "karin");
        assert_eq!(all[1].confidence, 50);
    }

    #[test]
    fn test_find_all_matches_min_confidence() {
        let options = opts(&["karin", "karim"]);
        let all = find_all_matches("karim", &options, 60);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].matched, "karim");
    }

    #[test]
    fn test_find_all_matches_stable_on_equal_confidence() {
        // Both at distance 1 from "caw" (threshold 1): equal confidence,
        // input order retained
        let options = opts(&["cat", "car"]);
        let all = find_all_matches("caw", &options, 0);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].matched, "cat");
        assert_eq!(all[1].matched, "car");
    }
}
