//! Per-intent model readiness checks.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SibylError};

/// Training state of one intent's embedding model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelStatus {
    /// Intent the status refers to.
    pub intent_id: String,
    /// Whether a trained model can serve classification requests.
    pub model_ready: bool,
    /// Whether embeddings have been computed for the training phrases.
    pub has_embeddings: bool,
}

/// Source of per-intent model readiness information.
///
/// Callers issue one check per candidate intent and may run them
/// concurrently; a failed check must not abort the others. Errors are
/// interpreted fail-closed by the engine: never assume a model exists.
#[async_trait]
pub trait ModelStatusProvider: Send + Sync {
    /// Fetch the model status for one intent.
    async fn status(&self, intent_id: &str) -> Result<ModelStatus>;
}

/// HTTP-backed model status client.
pub struct HttpModelStatusClient {
    client: Client,
    base_url: String,
}

impl HttpModelStatusClient {
    /// Create a client against the given base URL (no trailing slash).
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl std::fmt::Debug for HttpModelStatusClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpModelStatusClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl ModelStatusProvider for HttpModelStatusClient {
    async fn status(&self, intent_id: &str) -> Result<ModelStatus> {
        let url = format!("{}/api/intents/{}/model-status", self.base_url, intent_id);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SibylError::remote(format!(
                "model status for '{intent_id}' returned {status}"
            )));
        }

        let body = response.text().await?;
        let parsed: ModelStatus = serde_json::from_str(&body).map_err(|e| {
            SibylError::serialization(format!(
                "malformed model status response for '{intent_id}': {e}"
            ))
        })?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_status_wire_shape() {
        let json = r#"{"intentId":"abc","modelReady":true,"hasEmbeddings":false}"#;
        let status: ModelStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.intent_id, "abc");
        assert!(status.model_ready);
        assert!(!status.has_embeddings);
    }

    #[test]
    fn test_model_status_rejects_shape_mismatch() {
        // Legacy payloads used "ready"; the canonical schema must not
        // silently accept them.
        let json = r#"{"intentId":"abc","ready":true}"#;
        assert!(serde_json::from_str::<ModelStatus>(json).is_err());
    }
}
