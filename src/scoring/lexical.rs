//! Jaccard token-set similarity and the per-intent lexical scorer.

use crate::analysis::{NormalizedQuery, TokenSet, normalize, token_set};
use crate::corpus::Intent;

/// Bonus added per enabled keyword found in the query.
pub const KEYWORD_BONUS_PER_MATCH: f64 = 0.05;

/// Upper bound on the total keyword bonus.
pub const KEYWORD_BONUS_CAP: f64 = 0.15;

/// Boost when the full normalized intent name is a substring of the
/// query.
pub const NAME_SUBSTRING_BOOST: f64 = 0.4;

/// Boost when every token of the intent name appears in the query.
pub const NAME_TOKENS_BOOST: f64 = 0.25;

/// Jaccard index between two token sets: |A∩B| / |A∪B|.
///
/// Returns 0 if either set is empty. Symmetric, bounded to [0, 1], and
/// equal to 1 for identical non-empty sets.
pub fn jaccard_similarity(a: &TokenSet, b: &TokenSet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// Lexical confidence that `query` belongs to `intent`, in [0, 1].
///
/// Combines the best Jaccard similarity against the intent's curated
/// examples, a capped keyword bonus and an intent-name containment
/// boost. Hard-negative and staging phrases do not participate.
pub fn lexical_score(query: &NormalizedQuery, intent: &Intent) -> f64 {
    let best = intent
        .curated
        .iter()
        .map(|variant| jaccard_similarity(&query.tokens, &token_set(&variant.text)))
        .fold(0.0, f64::max);

    let score = best + keyword_bonus(query, intent) + phrase_boost(query, intent);
    score.min(1.0)
}

/// Flat bonus per enabled keyword whose normalized term occurs inside
/// the normalized query, capped at [`KEYWORD_BONUS_CAP`].
fn keyword_bonus(query: &NormalizedQuery, intent: &Intent) -> f64 {
    let mut bonus = 0.0;
    for keyword in intent.keywords.iter().filter(|k| k.enabled) {
        let term = normalize(&keyword.term);
        if !term.is_empty() && query.text.contains(&term) {
            bonus += KEYWORD_BONUS_PER_MATCH;
            if bonus >= KEYWORD_BONUS_CAP {
                return KEYWORD_BONUS_CAP;
            }
        }
    }
    bonus
}

/// Containment boost from the intent's display name.
fn phrase_boost(query: &NormalizedQuery, intent: &Intent) -> f64 {
    let name = normalize(&intent.name);
    if name.is_empty() {
        return 0.0;
    }
    if query.text.contains(&name) {
        return NAME_SUBSTRING_BOOST;
    }
    let name_tokens = token_set(&intent.name);
    if !name_tokens.is_empty() && name_tokens.iter().all(|t| query.tokens.contains(t)) {
        return NAME_TOKENS_BOOST;
    }
    0.0
}
