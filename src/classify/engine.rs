//! Classification engine implementation.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use log::{debug, warn};

use super::config::ClassifyConfig;
use super::types::{ClassificationResult, Decision, Method, PhaseLatency, RankedIntent};
use crate::analysis::NormalizedQuery;
use crate::corpus::TrainingCorpus;
use crate::remote::{EmbeddingClassifier, EmbeddingScore, ModelStatusProvider};
use crate::scoring::lexical_score;

/// Orchestrates the lexical fast path and the remote semantic path.
///
/// `classify` never fails: every error inside the semantic phase is
/// logged and demoted to the lexical-only result, so the caller always
/// receives a well-formed [`ClassificationResult`].
pub struct ClassificationEngine {
    /// Engine configuration.
    config: ClassifyConfig,
    /// Per-intent model readiness source.
    status: Arc<dyn ModelStatusProvider>,
    /// Remote semantic scorer.
    embeddings: Arc<dyn EmbeddingClassifier>,
}

impl ClassificationEngine {
    /// Create a new engine.
    pub fn new(
        config: ClassifyConfig,
        status: Arc<dyn ModelStatusProvider>,
        embeddings: Arc<dyn EmbeddingClassifier>,
    ) -> Self {
        Self {
            config,
            status,
            embeddings,
        }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &ClassifyConfig {
        &self.config
    }

    /// Classify `text` against the corpus's enabled intents.
    ///
    /// Phase A scores every enabled intent lexically. If the best
    /// baseline score is confidently high or low, the lexical result is
    /// final. Inside the ambiguous band the engine checks which intents
    /// have a ready model (fail-closed, checks run concurrently) and
    /// asks the embedding classifier to rank that subset; a non-empty
    /// answer is fused with the baseline.
    pub async fn classify(&self, text: &str, corpus: &TrainingCorpus) -> ClassificationResult {
        let start = Instant::now();

        // Phase A: lexical baseline over every enabled intent. The
        // stable sort keeps first-seen order on ties.
        let query = NormalizedQuery::new(text);
        let mut baseline: Vec<RankedIntent> = corpus
            .enabled_intents()
            .map(|intent| RankedIntent {
                intent_id: intent.id.clone(),
                name: intent.name.clone(),
                score: lexical_score(&query, intent),
            })
            .collect();
        baseline.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let baseline_score = baseline.first().map(|r| r.score).unwrap_or(0.0);
        let lexical_ms = elapsed_ms(&start);

        if self.config.debug {
            debug!(
                "baseline score {baseline_score:.4} over {} intents in {lexical_ms:.2}ms",
                baseline.len()
            );
        }

        // Tri-band path decision: outside the ambiguous band the
        // lexical result is final.
        if baseline_score >= self.config.fast_path_high
            || baseline_score < self.config.ambiguous_low
        {
            return self.fast_path(baseline, baseline_score, lexical_ms, &start);
        }

        // Phase B: readiness fan-out, then the embedding call.
        let ready = self.ready_intents(corpus).await;
        if ready.is_empty() {
            if self.config.debug {
                debug!("no models ready, staying on fast path");
            }
            return self.fast_path(baseline, baseline_score, lexical_ms, &start);
        }

        let embedding = match self.embeddings.classify(text, &ready).await {
            Ok(top) => top,
            Err(e) => {
                warn!("embedding classification failed: {e}");
                Vec::new()
            }
        };
        if embedding.is_empty() {
            return self.fast_path(baseline, baseline_score, lexical_ms, &start);
        }

        // Fusion: the embedding path is trusted more heavily once it is
        // available, and its winner takes over when it outscores the
        // baseline.
        let embedding_score = embedding[0].score;
        let final_score = self.config.baseline_weight * baseline_score
            + self.config.embedding_weight * embedding_score;
        let intent_id = if embedding_score > baseline_score {
            Some(embedding[0].intent_id.clone())
        } else {
            baseline.first().map(|r| r.intent_id.clone())
        };

        if self.config.debug {
            debug!(
                "hybrid fusion: baseline {baseline_score:.4}, embedding {embedding_score:.4}, \
                 final {final_score:.4}"
            );
        }

        let top = self.merge_top(&embedding, &baseline, corpus);
        let total_ms = elapsed_ms(&start);

        ClassificationResult {
            decision: self.decide(final_score),
            intent_id,
            score: final_score,
            top,
            method: Method::Hybrid,
            baseline_score,
            embedding_score: Some(embedding_score),
            latency: PhaseLatency {
                lexical_ms,
                semantic_ms: total_ms - lexical_ms,
                total_ms,
            },
        }
    }

    /// Check readiness for every enabled intent concurrently and return
    /// the ready subset. A failed check only excludes its own intent.
    async fn ready_intents(&self, corpus: &TrainingCorpus) -> Vec<String> {
        let checks = corpus.enabled_intents().map(|intent| {
            let id = intent.id.clone();
            async move {
                match self.status.status(&id).await {
                    Ok(status) if status.model_ready => Some(id),
                    Ok(_) => None,
                    Err(e) => {
                        warn!("model status check failed for '{id}', treating as not ready: {e}");
                        None
                    }
                }
            }
        });

        join_all(checks).await.into_iter().flatten().collect()
    }

    /// Build the lexical-only result.
    fn fast_path(
        &self,
        baseline: Vec<RankedIntent>,
        baseline_score: f64,
        lexical_ms: f64,
        start: &Instant,
    ) -> ClassificationResult {
        let intent_id = baseline.first().map(|r| r.intent_id.clone());
        let mut top = baseline;
        top.truncate(self.config.top_k);
        let total_ms = elapsed_ms(start);

        ClassificationResult {
            decision: self.decide(baseline_score),
            intent_id,
            score: baseline_score,
            top,
            method: Method::FastPath,
            baseline_score,
            embedding_score: None,
            latency: PhaseLatency {
                lexical_ms,
                semantic_ms: total_ms - lexical_ms,
                total_ms,
            },
        }
    }

    /// Merge embedding entries (priority, capped) with baseline entries
    /// into the ranked shortlist.
    fn merge_top(
        &self,
        embedding: &[EmbeddingScore],
        baseline: &[RankedIntent],
        corpus: &TrainingCorpus,
    ) -> Vec<RankedIntent> {
        let mut top: Vec<RankedIntent> = embedding
            .iter()
            .take(self.config.embedding_top_limit)
            .map(|entry| RankedIntent {
                intent_id: entry.intent_id.clone(),
                name: corpus
                    .intent(&entry.intent_id)
                    .map(|i| i.name.clone())
                    .unwrap_or_else(|| entry.intent_id.clone()),
                score: entry.score,
            })
            .collect();

        for candidate in baseline.iter().take(self.config.top_k) {
            if !top.iter().any(|r| r.intent_id == candidate.intent_id) {
                top.push(candidate.clone());
            }
        }

        top.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        top.truncate(self.config.top_k);
        top
    }

    fn decide(&self, score: f64) -> Decision {
        if score >= self.config.ambiguous_low {
            Decision::Match
        } else {
            Decision::NoMatch
        }
    }
}

fn elapsed_ms(start: &Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
