//! Text analysis for intent classification.
//!
//! Classification operates on a normalized view of text: case-folded,
//! diacritic-stripped, punctuation-free, whitespace-collapsed. The same
//! normalization is applied to queries, curated example phrases, keyword
//! terms and intent names so that comparisons are accent- and
//! case-insensitive.

mod normalizer;

pub use normalizer::{NormalizedQuery, TokenSet, normalize, token_set};
