//! Error types for the resolver's storage seam.
//!
//! The pure matching functions never fail; only candidate-universe fetches
//! can. Fetch failures propagate out of the resolver so the caller can fall
//! back to running the query unresolved.

use thiserror::Error;

/// Failure reported by a [`CandidateSource`](crate::resolver::CandidateSource)
/// implementation.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct SourceError(#[from] Box<dyn std::error::Error + Send + Sync>);

impl SourceError {
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self(err.into())
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("candidate lookup failed for {field}: {source}")]
    CandidateFetch {
        field: &'static str,
        #[source]
        source: SourceError,
    },
}
