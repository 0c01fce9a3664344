//! # Sibyl
//!
//! A hybrid intent classification engine for dialogue-flow design tools.
//!
//! Sibyl decides which user-defined intent an utterance belongs to by
//! combining two scoring paths:
//!
//! - A synchronous lexical fast path (token-set Jaccard similarity plus
//!   keyword and intent-name boosts) that runs on every call.
//! - An optional remote semantic path (embedding-based classification)
//!   that is only consulted when the lexical score is ambiguous and at
//!   least one intent has a trained model available.
//!
//! The two scores are fused into a single confidence value and a
//! match/no-match decision, together with a ranked top-K shortlist and
//! per-phase latency accounting. Remote failures never surface to the
//! caller; classification degrades to the lexical-only result.

pub mod analysis;
pub mod classify;
pub mod corpus;
pub mod error;
pub mod remote;
pub mod scoring;
pub mod session;

pub mod prelude {
    pub use crate::classify::{
        ClassificationEngine, ClassificationResult, ClassifyConfig, Decision, Method,
    };
    pub use crate::corpus::{Intent, TrainingCorpus, VariantKind};
    pub use crate::error::{Result, SibylError};
    pub use crate::remote::{EmbeddingClassifier, ModelStatusProvider};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
