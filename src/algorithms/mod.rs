//! Core string matching algorithms
//!
//! Each algorithm is implemented as a standalone function for composability.
//! All functions here are pure and synchronous; the only I/O in this crate
//! lives behind the resolver's candidate source.

pub mod hybrid;
pub mod levenshtein;
pub mod names;
pub mod phonetic;

pub use hybrid::*;
pub use levenshtein::*;
pub use names::*;
pub use phonetic::*;
