//! Configuration for the fusion & decision engine.

use serde::{Deserialize, Serialize};

/// Baseline scores at or above this value skip the semantic path: high
/// confidence needs no confirmation.
pub const FAST_PATH_HIGH: f64 = 0.70;

/// Baseline scores below this value skip the semantic path (not worth
/// the round trip). Also reused as the global match threshold.
pub const AMBIGUOUS_LOW: f64 = 0.25;

/// Weight of the lexical baseline in the fused score.
pub const BASELINE_FUSION_WEIGHT: f64 = 0.3;

/// Weight of the embedding score in the fused score. The semantic path
/// is trusted more heavily once it is available.
pub const EMBEDDING_FUSION_WEIGHT: f64 = 0.7;

/// Maximum length of the ranked shortlist.
pub const TOP_K: usize = 5;

/// Maximum number of embedding-sourced entries merged into the
/// shortlist.
pub const EMBEDDING_TOP_LIMIT: usize = 3;

/// Engine configuration, passed explicitly to the entry point instead
/// of being read from ambient global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyConfig {
    /// Emit per-phase diagnostics through the `log` facade.
    pub debug: bool,
    /// Upper bound of the ambiguous band.
    pub fast_path_high: f64,
    /// Lower bound of the ambiguous band; doubles as the match
    /// threshold. The per-intent `threshold` field is deliberately not
    /// consulted here, matching the behavior the editor ships with.
    pub ambiguous_low: f64,
    /// Lexical weight used when fusing.
    pub baseline_weight: f64,
    /// Embedding weight used when fusing.
    pub embedding_weight: f64,
    /// Ranked shortlist length.
    pub top_k: usize,
    /// Embedding entries admitted into the shortlist.
    pub embedding_top_limit: usize,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            debug: false,
            fast_path_high: FAST_PATH_HIGH,
            ambiguous_low: AMBIGUOUS_LOW,
            baseline_weight: BASELINE_FUSION_WEIGHT,
            embedding_weight: EMBEDDING_FUSION_WEIGHT,
            top_k: TOP_K,
            embedding_top_limit: EMBEDDING_TOP_LIMIT,
        }
    }
}
