//! inventory-fuzzy - typo-tolerant matching for inventory search
//!
//! A small deterministic string-matching library used to resolve free-text
//! query values ("Karim", "Mohammad Hossein") against the live universe of
//! usernames and departments in an asset inventory.
//!
//! # Features
//! - Levenshtein edit distance with adaptive thresholds
//! - Soundex-style phonetic coding
//! - Bengali/South-Asian name-variant normalization
//! - Ranked hybrid matching (exact, contains, phonetic, edit distance)
//! - An async resolver that rewrites query filters and reports corrections

pub mod algorithms;
pub mod error;
pub mod resolver;

// Re-exports for the common call sites (explicit to keep the surface flat)
pub use algorithms::hybrid::{hybrid_match, MatchResult, MatchType};
pub use algorithms::levenshtein::{
    adaptive_threshold, find_all_matches, find_best_match, fuzzy_match, levenshtein,
    levenshtein_similarity, BestMatch,
};
pub use algorithms::names::{
    are_bengali_names_equivalent, get_bengali_name_variations, normalize_bengali_name,
    search_with_bengali_variations,
};
pub use algorithms::phonetic::{sounds_like, soundex, soundex_similarity};
pub use error::{ResolveError, SourceError};
pub use resolver::{
    resolve_filters, CandidateSource, CorrectionMethod, FilterField, FuzzyCorrection,
    QueryFilters, SimilarCandidate, MIN_ACCEPT_CONFIDENCE,
};
