//! Lexical scoring for the classification fast path.
//!
//! Everything here is synchronous and allocation-light: the lexical
//! scorer runs for every enabled intent on every keystroke-triggered
//! test, so it must never touch the network.

mod lexical;

pub use lexical::{
    KEYWORD_BONUS_CAP, KEYWORD_BONUS_PER_MATCH, NAME_SUBSTRING_BOOST, NAME_TOKENS_BOOST,
    jaccard_similarity, lexical_score,
};
