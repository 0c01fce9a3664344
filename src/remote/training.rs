//! Training submission and report types.
//!
//! Model training itself belongs to a separate subsystem; this module
//! only carries the request/response shapes the editor consumes when it
//! submits tagged phrases and renders the resulting report.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SibylError};

/// Tag applied to a phrase submitted for training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhraseTag {
    /// The phrase should match the intent.
    Matching,
    /// The phrase must not match the intent (hard negative).
    NotMatching,
}

/// One phrase submitted for training.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaggedPhrase {
    /// Phrase text.
    pub text: String,
    /// Matching or not-matching.
    pub tag: PhraseTag,
}

impl TaggedPhrase {
    /// Create a matching phrase.
    pub fn matching<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            tag: PhraseTag::Matching,
        }
    }

    /// Create a not-matching (hard negative) phrase.
    pub fn not_matching<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            tag: PhraseTag::NotMatching,
        }
    }
}

/// Per-bucket counters from a training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingStats {
    /// Matching phrases submitted.
    pub matching: usize,
    /// Not-matching phrases submitted.
    pub not_matching: usize,
    /// Phrases successfully embedded.
    pub processed: usize,
    /// Phrases the trainer could not embed.
    pub failed: usize,
    /// Total phrases submitted.
    pub total: usize,
}

/// Result of a training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingReport {
    /// Whether the intent's model is ready after this run.
    pub model_ready: bool,
    /// Per-bucket counters.
    pub stats: TrainingStats,
}

/// HTTP-backed training client.
pub struct HttpTrainingClient {
    client: Client,
    base_url: String,
}

impl HttpTrainingClient {
    /// Create a client against the given base URL (no trailing slash).
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Submit tagged phrases for one intent and decode the report.
    ///
    /// Unlike classification, training errors are surfaced to the
    /// caller: the editor shows them instead of degrading silently.
    pub async fn train(&self, intent_id: &str, phrases: &[TaggedPhrase]) -> Result<TrainingReport> {
        let url = format!("{}/api/intents/{}/train", self.base_url, intent_id);
        let response = self.client.post(&url).json(&phrases).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SibylError::remote(format!(
                "training for '{intent_id}' returned {status}"
            )));
        }

        let body = response.text().await?;
        let report: TrainingReport = serde_json::from_str(&body).map_err(|e| {
            SibylError::serialization(format!("malformed training report for '{intent_id}': {e}"))
        })?;
        Ok(report)
    }
}

impl std::fmt::Debug for HttpTrainingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTrainingClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}
