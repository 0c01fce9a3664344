//! Per-session classification result cache.
//!
//! While a batch of training phrases is under test, the editor renders
//! classification status per phrase. [`TestSession`] holds that state:
//! an insertion-ordered map from phrase id to either `Loading` or the
//! final result. It is not authoritative and is rebuilt wholesale
//! whenever the phrase set or the model-ready flag changes identity.
//!
//! Completions carry the generation they were started under; a
//! `clear()` bumps the generation so results from superseded runs are
//! discarded instead of resurrecting stale entries.

use ahash::AHashMap;

use crate::classify::{ClassificationEngine, ClassificationResult};
use crate::corpus::{PhraseVariant, TrainingCorpus};

/// Test status of one phrase.
#[derive(Debug, Clone)]
pub enum PhraseStatus {
    /// Classification is in flight.
    Loading,
    /// Final result.
    Done(ClassificationResult),
}

impl PhraseStatus {
    /// Whether the phrase is still being classified.
    pub fn is_loading(&self) -> bool {
        matches!(self, PhraseStatus::Loading)
    }
}

/// Insertion-ordered `phrase id → status` map for one test run.
#[derive(Debug, Default)]
pub struct TestSession {
    order: Vec<String>,
    entries: AHashMap<String, PhraseStatus>,
    generation: u64,
}

impl TestSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked phrases.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the session tracks no phrases.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Current generation. Bumped on every `clear()`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mark a phrase as loading and return the generation its eventual
    /// completion must carry. A phrase already tracked keeps its
    /// position; other entries are untouched.
    pub fn mark_loading(&mut self, phrase_id: &str) -> u64 {
        if !self.entries.contains_key(phrase_id) {
            self.order.push(phrase_id.to_string());
        }
        self.entries
            .insert(phrase_id.to_string(), PhraseStatus::Loading);
        self.generation
    }

    /// Publish a final result for a phrase.
    ///
    /// Returns `false` (and drops the result) when `generation` is
    /// stale or the phrase is no longer tracked, which happens when the
    /// session was cleared while the classification was in flight.
    pub fn complete(
        &mut self,
        generation: u64,
        phrase_id: &str,
        result: ClassificationResult,
    ) -> bool {
        if generation != self.generation || !self.entries.contains_key(phrase_id) {
            return false;
        }
        self.entries
            .insert(phrase_id.to_string(), PhraseStatus::Done(result));
        true
    }

    /// Status of one phrase.
    pub fn status(&self, phrase_id: &str) -> Option<&PhraseStatus> {
        self.entries.get(phrase_id)
    }

    /// Iterate `(phrase id, status)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PhraseStatus)> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id).map(|s| (id.as_str(), s)))
    }

    /// Drop every entry and invalidate in-flight completions.
    pub fn clear(&mut self) {
        self.order.clear();
        self.entries.clear();
        self.generation += 1;
    }

    /// Classify a batch of phrases sequentially, one call at a time,
    /// publishing each result as it lands.
    ///
    /// Sequential processing guarantees partial progress is observable
    /// between phrases and that one phrase's outcome cannot block the
    /// rest; `classify` itself never fails.
    pub async fn run_batch(
        &mut self,
        engine: &ClassificationEngine,
        corpus: &TrainingCorpus,
        phrases: &[PhraseVariant],
    ) {
        for phrase in phrases {
            let generation = self.mark_loading(&phrase.id);
            let result = engine.classify(&phrase.text, corpus).await;
            self.complete(generation, &phrase.id, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::classify::{ClassifyConfig, Decision, Method, PhaseLatency};
    use crate::error::Result;
    use crate::remote::{EmbeddingClassifier, EmbeddingScore, ModelStatus, ModelStatusProvider};

    struct NeverReady;

    #[async_trait]
    impl ModelStatusProvider for NeverReady {
        async fn status(&self, intent_id: &str) -> Result<ModelStatus> {
            Ok(ModelStatus {
                intent_id: intent_id.to_string(),
                model_ready: false,
                has_embeddings: false,
            })
        }
    }

    struct NoEmbeddings;

    #[async_trait]
    impl EmbeddingClassifier for NoEmbeddings {
        async fn classify(
            &self,
            _text: &str,
            _intent_ids: &[String],
        ) -> Result<Vec<EmbeddingScore>> {
            Ok(Vec::new())
        }
    }

    fn dummy_result() -> ClassificationResult {
        ClassificationResult {
            decision: Decision::NoMatch,
            intent_id: None,
            score: 0.0,
            top: Vec::new(),
            method: Method::FastPath,
            baseline_score: 0.0,
            embedding_score: None,
            latency: PhaseLatency::default(),
        }
    }

    #[test]
    fn test_loading_then_done() {
        let mut session = TestSession::new();
        let generation = session.mark_loading("p1");
        assert!(session.status("p1").unwrap().is_loading());

        assert!(session.complete(generation, "p1", dummy_result()));
        assert!(!session.status("p1").unwrap().is_loading());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut session = TestSession::new();
        session.mark_loading("p1");
        session.mark_loading("p2");
        session.mark_loading("p3");

        // Re-marking p1 must not move it to the back.
        let generation = session.mark_loading("p1");
        session.complete(generation, "p1", dummy_result());

        let ids: Vec<_> = session.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_stale_generation_discarded() {
        let mut session = TestSession::new();
        let generation = session.mark_loading("p1");

        session.clear();
        assert!(session.is_empty());

        // The in-flight completion from before the clear must not
        // resurrect the entry.
        assert!(!session.complete(generation, "p1", dummy_result()));
        assert!(session.is_empty());
    }

    #[test]
    fn test_clear_bumps_generation() {
        let mut session = TestSession::new();
        let before = session.generation();
        session.clear();
        assert_eq!(session.generation(), before + 1);
    }

    #[test]
    fn test_run_batch_sequential() {
        let engine = ClassificationEngine::new(
            ClassifyConfig::default(),
            Arc::new(NeverReady),
            Arc::new(NoEmbeddings),
        );
        let mut corpus = TrainingCorpus::new();
        let intent_id = corpus.create_intent("Billing");
        corpus
            .add_variant(
                &intent_id,
                crate::corpus::VariantKind::Curated,
                "vorrei la fattura",
                "it",
            )
            .unwrap();

        let phrases = vec![
            PhraseVariant::new("vorrei la fattura", "it"),
            PhraseVariant::new("tutt'altro argomento", "it"),
        ];

        let mut session = TestSession::new();
        tokio_test::block_on(session.run_batch(&engine, &corpus, &phrases));

        assert_eq!(session.len(), 2);
        let statuses: Vec<_> = session.iter().collect();
        match statuses[0].1 {
            PhraseStatus::Done(result) => assert_eq!(result.decision, Decision::Match),
            PhraseStatus::Loading => panic!("first phrase still loading"),
        }
        match statuses[1].1 {
            PhraseStatus::Done(result) => assert_eq!(result.decision, Decision::NoMatch),
            PhraseStatus::Loading => panic!("second phrase still loading"),
        }
    }
}
