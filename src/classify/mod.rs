//! Fusion & decision engine.
//!
//! [`ClassificationEngine`] orchestrates the two scoring paths: the
//! lexical baseline always runs; the remote semantic path is consulted
//! only for baseline scores inside the ambiguous band, and only for
//! intents whose embedding model is ready. The fused score drives a
//! match/no-match decision and a ranked top-K shortlist.

mod config;
mod engine;
mod types;

pub use config::{
    AMBIGUOUS_LOW, BASELINE_FUSION_WEIGHT, ClassifyConfig, EMBEDDING_FUSION_WEIGHT,
    EMBEDDING_TOP_LIMIT, FAST_PATH_HIGH, TOP_K,
};
pub use engine::ClassificationEngine;
pub use types::{ClassificationResult, Decision, Method, PhaseLatency, RankedIntent};
