//! Output types for classification.

use serde::{Deserialize, Serialize};

/// Match/no-match verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Fused score reached the match threshold.
    #[serde(rename = "MATCH")]
    Match,
    /// Fused score fell below the match threshold.
    #[serde(rename = "NO_MATCH")]
    NoMatch,
}

/// Which scoring route produced the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    /// Lexical-only result (high or low confidence band, or semantic
    /// path unavailable).
    #[serde(rename = "fast-path")]
    FastPath,
    /// Embedding-only result. Kept for wire compatibility; the current
    /// fusion policy never emits it.
    #[serde(rename = "embeddings")]
    Embeddings,
    /// Lexical baseline fused with a remote embedding score.
    #[serde(rename = "hybrid")]
    Hybrid,
}

/// One entry of the ranked shortlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedIntent {
    /// Candidate intent id.
    pub intent_id: String,
    /// Display name at classification time.
    pub name: String,
    /// Score in the source path's scale.
    pub score: f64,
}

/// Wall-clock accounting for the two classification phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseLatency {
    /// Lexical (phase-a) time in milliseconds.
    pub lexical_ms: f64,
    /// Readiness + embedding + fusion (phase-b) time in milliseconds.
    pub semantic_ms: f64,
    /// Total time in milliseconds.
    pub total_ms: f64,
}

/// The result of one classification call.
///
/// A pure output value: fully determined by the input text, the corpus
/// state and the readiness of remote models at call time. Classification
/// never mutates the corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Match/no-match verdict.
    pub decision: Decision,
    /// Best-matching intent, if any candidate was scored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_id: Option<String>,
    /// Fused confidence in [0, 1].
    pub score: f64,
    /// Ranked shortlist, descending by score, at most top-K entries.
    pub top: Vec<RankedIntent>,
    /// Scoring route that produced `score`.
    pub method: Method,
    /// Lexical baseline score.
    pub baseline_score: f64,
    /// Top embedding score, when the semantic path contributed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding_score: Option<f64>,
    /// Per-phase latency.
    pub latency: PhaseLatency,
}
