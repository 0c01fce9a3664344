//! Text normalizer implementation.

use ahash::AHashSet;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Set of normalized terms extracted from a piece of text.
pub type TokenSet = AHashSet<String>;

/// Normalize text for lexical comparison.
///
/// Lower-cases, decomposes to NFD and drops combining marks (so "é"
/// compares equal to "e"), replaces anything that is not a letter or
/// digit with a space, collapses whitespace runs and trims.
///
/// Empty or punctuation-only input normalizes to the empty string.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
        } else {
            pending_space = true;
        }
    }

    out
}

/// Extract the set of normalized terms from raw text.
pub fn token_set(text: &str) -> TokenSet {
    normalize(text)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// A query normalized once and reused across every intent it is scored
/// against.
#[derive(Debug, Clone)]
pub struct NormalizedQuery {
    /// Normalized text (used for substring checks).
    pub text: String,
    /// Set of normalized terms (used for Jaccard overlap).
    pub tokens: TokenSet,
}

impl NormalizedQuery {
    /// Normalize raw query text.
    pub fn new(raw: &str) -> Self {
        let text = normalize(raw);
        let tokens = text
            .split(' ')
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .collect();
        Self { text, tokens }
    }

    /// Whether the normalized query is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
