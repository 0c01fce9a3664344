//! Remote service abstractions for the semantic path.
//!
//! The classifier talks to two remote endpoints owned by the training
//! subsystem: a per-intent model status check and an embedding-based
//! classification call. Both are modeled as object-safe async traits so
//! the fusion engine can be exercised against in-process fakes.
//!
//! Failure policy differs per endpoint:
//!
//! - Status checks fail closed: any error means "model not ready".
//! - Embedding classification degrades to an empty candidate list on
//!   transport or HTTP failure, but a 2xx body that does not match the
//!   canonical response schema is a loud parse error.

mod embedding;
mod status;
mod training;

pub use embedding::{EmbeddingClassifier, EmbeddingScore, HttpEmbeddingClient};
pub use status::{HttpModelStatusClient, ModelStatus, ModelStatusProvider};
pub use training::{HttpTrainingClient, TaggedPhrase, TrainingReport, TrainingStats};
