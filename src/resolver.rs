//! Query-level fuzzy resolver
//!
//! Takes the structured filter extracted from a natural-language query and
//! resolves its raw free-text values against the live candidate universe
//! (usernames, departments). On success the filter value is rewritten in
//! place and a [`FuzzyCorrection`] is recorded for the UI to render as an
//! "auto-corrected" badge. A miss is silent: the value passes through
//! unchanged and empty downstream results tell the story.
//!
//! Username values go through a four-tier cascade (database trigram
//! similarity, exact case fix, name-variant equivalence, hybrid match);
//! department values use the database pass only. Each tier short-circuits
//! the rest once it clears the acceptance bar, so the fastest signal wins
//! even when a later tier might score higher.

use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithms::hybrid::{hybrid_match, MatchType};
use crate::algorithms::names::are_bengali_names_equivalent;
use crate::error::{ResolveError, SourceError};

/// Minimum confidence (0-100) a tier must reach before its candidate
/// replaces the user's input.
pub const MIN_ACCEPT_CONFIDENCE: u8 = 60;

/// A candidate returned by the storage collaborator's trigram search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarCandidate {
    pub candidate: String,
    /// Trigram-style similarity, 0.0 to 1.0
    pub similarity: f64,
}

/// Filter fields the resolver knows how to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Username,
    Department,
}

impl FilterField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FilterField::Username => "username",
            FilterField::Department => "department",
        }
    }
}

/// The storage seam: candidate lookups against the inventory database.
///
/// Implemented by the CRUD/persistence layer. `similar_candidates` is a
/// trigram-style similarity search sorted descending, capped at 5 results
/// with a 0.3 similarity floor applied by the implementation;
/// `all_candidates` returns the full distinct-value universe for a field.
// Desugared async methods so the Send bound is part of the contract;
// implementations can still write plain `async fn`.
pub trait CandidateSource {
    fn similar_candidates(
        &self,
        field: FilterField,
        value: &str,
    ) -> impl Future<Output = Result<Vec<SimilarCandidate>, SourceError>> + Send;

    fn all_candidates(
        &self,
        field: FilterField,
    ) -> impl Future<Output = Result<Vec<String>, SourceError>> + Send;
}

/// How a correction was produced. Serialized as the method string shown to
/// the UI ("database_trigram", "exact_case_fix", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionMethod {
    DatabaseTrigram,
    ExactCaseFix,
    BengaliNormalization,
    Exact,
    Fuzzy,
    Phonetic,
    Contains,
}

impl CorrectionMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CorrectionMethod::DatabaseTrigram => "database_trigram",
            CorrectionMethod::ExactCaseFix => "exact_case_fix",
            CorrectionMethod::BengaliNormalization => "bengali_normalization",
            CorrectionMethod::Exact => "exact",
            CorrectionMethod::Fuzzy => "fuzzy",
            CorrectionMethod::Phonetic => "phonetic",
            CorrectionMethod::Contains => "contains",
        }
    }
}

impl From<MatchType> for CorrectionMethod {
    fn from(match_type: MatchType) -> Self {
        match match_type {
            MatchType::Exact => CorrectionMethod::Exact,
            MatchType::Fuzzy => CorrectionMethod::Fuzzy,
            MatchType::Phonetic => CorrectionMethod::Phonetic,
            MatchType::Contains => CorrectionMethod::Contains,
        }
    }
}

/// Record of one rewritten filter value, response-scoped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuzzyCorrection {
    pub field: FilterField,
    pub original: String,
    pub corrected: String,
    pub confidence: u8,
    pub method: CorrectionMethod,
}

/// Structured filter extracted by the upstream intent classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilters {
    pub username: Option<String>,
    pub department: Option<String>,
}

/// Rewrite `value` to `corrected`, recording a correction.
///
/// A candidate identical to the input is a resolution, not a replacement:
/// nothing is recorded and the value stays as-is.
fn apply(
    field: FilterField,
    value: &mut String,
    corrected: String,
    confidence: u8,
    method: CorrectionMethod,
) -> Option<FuzzyCorrection> {
    if corrected == *value {
        return None;
    }
    debug!(
        field = field.as_str(),
        original = value.as_str(),
        corrected = corrected.as_str(),
        confidence,
        method = method.as_str(),
        "fuzzy-corrected filter value"
    );
    let original = std::mem::replace(value, corrected.clone());
    Some(FuzzyCorrection {
        field,
        original,
        corrected,
        confidence,
        method,
    })
}

/// Tier 1: database trigram similarity. Accepts the top candidate as soon
/// as it clears the bar. `Ok(true)` means the tier resolved the value
/// (with or without recording a correction).
async fn database_pass<S: CandidateSource>(
    source: &S,
    field: FilterField,
    value: &mut String,
    corrections: &mut Vec<FuzzyCorrection>,
) -> Result<bool, ResolveError> {
    let similar = source
        .similar_candidates(field, value)
        .await
        .map_err(|source| ResolveError::CandidateFetch {
            field: field.as_str(),
            source,
        })?;

    if let Some(top) = similar.first() {
        let confidence = (top.similarity * 100.0).round() as u8;
        if confidence >= MIN_ACCEPT_CONFIDENCE {
            corrections.extend(apply(
                field,
                value,
                top.candidate.clone(),
                confidence,
                CorrectionMethod::DatabaseTrigram,
            ));
            return Ok(true);
        }
    }
    Ok(false)
}

/// Username cascade: trigram, exact case fix, name-variant equivalence,
/// hybrid. Short-circuits at the first tier that resolves the value.
async fn resolve_username<S: CandidateSource>(
    source: &S,
    value: &mut String,
    corrections: &mut Vec<FuzzyCorrection>,
) -> Result<(), ResolveError> {
    let field = FilterField::Username;

    if database_pass(source, field, value, corrections).await? {
        return Ok(());
    }

    let all = source
        .all_candidates(field)
        .await
        .map_err(|source| ResolveError::CandidateFetch {
            field: field.as_str(),
            source,
        })?;

    // Exact, case-insensitive. An identical candidate means the input was
    // already valid and must never be replaced.
    let value_lower = value.to_lowercase();
    if let Some(candidate) = all.iter().find(|c| c.to_lowercase() == value_lower) {
        if candidate.as_str() != value.as_str() {
            corrections.extend(apply(
                field,
                value,
                candidate.clone(),
                100,
                CorrectionMethod::ExactCaseFix,
            ));
        }
        return Ok(());
    }

    // Full-name variant equivalence. Word-level variant search is too loose
    // here: a bare given name must not silently expand to a full name.
    if let Some(candidate) = all
        .iter()
        .find(|c| are_bengali_names_equivalent(value, c))
    {
        corrections.extend(apply(
            field,
            value,
            candidate.clone(),
            95,
            CorrectionMethod::BengaliNormalization,
        ));
        return Ok(());
    }

    // Hybrid match; the top result still has to clear the acceptance bar
    // because the substring and phonetic tiers are not gated inside
    // hybrid_match itself.
    if let Some(top) = hybrid_match(value, &all, MIN_ACCEPT_CONFIDENCE).into_iter().next() {
        if top.confidence >= MIN_ACCEPT_CONFIDENCE {
            corrections.extend(apply(
                field,
                value,
                top.matched,
                top.confidence,
                top.match_type.into(),
            ));
            return Ok(());
        }
    }

    debug!(field = field.as_str(), value = value.as_str(), "no fuzzy match, passing through");
    Ok(())
}

/// Resolve the free-text values of a filter set against the live candidate
/// universe. The sole entry point of this crate's resolver.
///
/// Filter values are mutated in place; the returned list holds one
/// [`FuzzyCorrection`] per rewritten value, in field order, for the UI to
/// surface. A value with no acceptable match is left untouched and records
/// nothing. Department values only go through the database similarity pass.
///
/// # Errors
///
/// Propagates candidate-fetch failures as [`ResolveError`]. Callers should
/// treat resolution as best-effort and run the query with the original
/// values when it fails.
pub async fn resolve_filters<S: CandidateSource>(
    filters: &mut QueryFilters,
    source: &S,
) -> Result<Vec<FuzzyCorrection>, ResolveError> {
    let mut corrections = Vec::new();

    if let Some(value) = filters.username.as_mut() {
        resolve_username(source, value, &mut corrections).await?;
    }

    if let Some(value) = filters.department.as_mut() {
        database_pass(source, FilterField::Department, value, &mut corrections).await?;
    }

    Ok(corrections)
}
