//! Bengali / South-Asian name-variant normalization
//!
//! Personal names arrive in many transliterations ("Mohammad" / "Muhammad" /
//! "Mohammed", "Hossain" / "Hossein" / "Hussain"). A static table maps every
//! known spelling to one canonical form so that two transliterations of the
//! same name compare equal, and so a search term can be expanded to all of
//! its known spellings.
//!
//! The table and its reverse index are built once at first use and never
//! mutated; concurrent reads need no synchronization.

use ahash::AHashMap;
use std::sync::LazyLock;

/// Canonical spelling -> known variants (all lowercase). Each canonical
/// appears in its own variant list. If the same variant ever shows up under
/// two canonicals, the later entry wins in the reverse index; that is a
/// data-quality defect in this table, not a runtime error.
const NAME_VARIANTS: &[(&str, &[&str])] = &[
    ("mohammad", &["mohammad", "muhammad", "mohammed", "muhammed", "mohamad", "mohammod", "md"]),
    ("hossain", &["hossain", "hossein", "hussain", "hussein", "hossen", "hosen"]),
    ("rahman", &["rahman", "rahaman", "rehman", "rohman"]),
    ("karim", &["karim", "kareem", "korim"]),
    ("ahmed", &["ahmed", "ahmad", "ahmmed", "ahamed"]),
    ("abdul", &["abdul", "abdool", "abdal", "abdoul"]),
    ("islam", &["islam", "eslam"]),
    ("uddin", &["uddin", "uddeen", "udin"]),
    ("begum", &["begum", "begom"]),
    ("akter", &["akter", "akhter", "aktar", "akhtar"]),
    ("chowdhury", &["chowdhury", "choudhury", "chaudhury", "chowdury"]),
    ("sheikh", &["sheikh", "shaikh", "sheik", "shekh"]),
    ("hasan", &["hasan", "hassan", "hasen"]),
    ("haque", &["haque", "hoque", "huq", "hoq"]),
    ("mahmud", &["mahmud", "mahmood", "mahmoud"]),
    ("siddique", &["siddique", "siddiqui", "siddik", "siddiki"]),
    ("fatema", &["fatema", "fatima", "fathema"]),
    ("khatun", &["khatun", "khatoon"]),
    ("jahan", &["jahan", "jahaan"]),
    ("miah", &["miah", "mia", "miya", "mea"]),
    ("sultana", &["sultana", "sultanna"]),
    ("alam", &["alam", "alom"]),
    ("nasrin", &["nasrin", "nasreen"]),
    ("kabir", &["kabir", "kabeer"]),
    ("rashid", &["rashid", "rasheed"]),
    ("aziz", &["aziz", "azeez"]),
    ("salam", &["salam", "salaam"]),
    ("shahid", &["shahid", "shaheed"]),
    ("habib", &["habib", "habeeb"]),
    ("rafiq", &["rafiq", "rafique", "rofiq"]),
];

/// Reverse index: variant spelling -> canonical key.
static VARIANT_TO_CANONICAL: LazyLock<AHashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut index = AHashMap::new();
        for &(canonical, variants) in NAME_VARIANTS {
            for &variant in variants {
                index.insert(variant, canonical);
            }
        }
        index
    });

/// Canonical key -> its full variant list.
static CANONICAL_VARIANTS: LazyLock<AHashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| NAME_VARIANTS.iter().copied().collect());

/// Capitalize the first letter, lowercase the rest.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Rewrite each word of a name to its canonical spelling.
///
/// Lowercases, splits on whitespace, replaces known variants, rejoins with
/// single spaces. Unknown words pass through lowercased.
///
/// # Examples
/// ```
/// use inventory_fuzzy::normalize_bengali_name;
/// assert_eq!(normalize_bengali_name("Muhammad Hossein"), "mohammad hossain");
/// assert_eq!(normalize_bengali_name("Sarah Wilson"), "sarah wilson");
/// ```
#[must_use]
pub fn normalize_bengali_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .map(|word| *VARIANT_TO_CANONICAL.get(word).unwrap_or(&word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether two names are the same after canonicalization.
///
/// Word order matters: "John Karim" is not equivalent to "Karim John".
///
/// # Examples
/// ```
/// use inventory_fuzzy::are_bengali_names_equivalent;
/// assert!(are_bengali_names_equivalent("Abdul Karim", "Abdal Kareem"));
/// assert!(!are_bengali_names_equivalent("Abdul Karim", "Karim Abdul"));
/// ```
#[must_use]
pub fn are_bengali_names_equivalent(a: &str, b: &str) -> bool {
    normalize_bengali_name(a) == normalize_bengali_name(b)
}

/// Enumerate every known spelling combination of a name.
///
/// Each word expands to its full variant list (or just itself when
/// unknown); the result is the Cartesian product across words, title-cased
/// per word. A canonical name always appears in its own output. The output
/// size is the product of per-word variant counts, so multi-word names with
/// common parts can expand to dozens of combinations.
///
/// # Examples
/// ```
/// use inventory_fuzzy::get_bengali_name_variations;
/// let variations = get_bengali_name_variations("Karim");
/// assert!(variations.contains(&"Karim".to_string()));
/// assert!(variations.contains(&"Kareem".to_string()));
/// ```
#[must_use]
pub fn get_bengali_name_variations(name: &str) -> Vec<String> {
    let lower = name.to_lowercase();
    let word_variants: Vec<Vec<&str>> = lower
        .split_whitespace()
        .map(|word| match VARIANT_TO_CANONICAL.get(word) {
            Some(canonical) => CANONICAL_VARIANTS[canonical].to_vec(),
            None => vec![word],
        })
        .collect();

    if word_variants.is_empty() {
        return Vec::new();
    }

    // Cartesian product across words
    let mut combinations: Vec<Vec<&str>> = vec![Vec::new()];
    for variants in &word_variants {
        let mut next = Vec::with_capacity(combinations.len() * variants.len());
        for combo in &combinations {
            for &variant in variants {
                let mut extended = combo.clone();
                extended.push(variant);
                next.push(extended);
            }
        }
        combinations = next;
    }

    combinations
        .into_iter()
        .map(|combo| {
            combo
                .into_iter()
                .map(title_case)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Find every name in `names` that matches the search term after
/// canonicalization.
///
/// A name matches when its normalized form equals the normalized term, or
/// when the two share at least one whole word (so "karim hossain" pulls in
/// both "Abdul Karim" and "Hussain Ahmed" by their shared words).
#[must_use]
pub fn search_with_bengali_variations(search_term: &str, names: &[String]) -> Vec<String> {
    let normalized_term = normalize_bengali_name(search_term);
    let term_words: Vec<&str> = normalized_term.split_whitespace().collect();

    names
        .iter()
        .filter(|name| {
            let normalized = normalize_bengali_name(name);
            normalized == normalized_term
                || normalized
                    .split_whitespace()
                    .any(|word| term_words.contains(&word))
        })
        .cloned()
        .collect()
}
