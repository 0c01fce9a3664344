//! Remote embedding classification client.

use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SibylError};

/// One ranked candidate from the embedding classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingScore {
    /// Candidate intent id.
    pub intent_id: String,
    /// Semantic confidence in [0, 1].
    pub score: f64,
}

/// Remote semantic scorer over a set of model-ready intents.
#[async_trait]
pub trait EmbeddingClassifier: Send + Sync {
    /// Rank `intent_ids` against `text`, best first.
    ///
    /// Implementations return `Ok(vec![])` on transport or HTTP
    /// failure (after logging), so that the caller's fallback logic
    /// only has to deal with "no candidates". A successful response
    /// whose body does not match the canonical schema is an error.
    async fn classify(&self, text: &str, intent_ids: &[String]) -> Result<Vec<EmbeddingScore>>;
}

/// Request body for `POST /api/intents/classify-embedding`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassifyRequest<'a> {
    text: &'a str,
    intent_ids: &'a [String],
}

/// Response body: a ranked shortlist under `top`.
///
/// This is the one canonical schema; `deny_unknown_fields` is left off
/// so the server may add fields, but the required ones must be present
/// under these exact names.
#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    top: Vec<EmbeddingScore>,
}

/// HTTP-backed embedding classifier.
pub struct HttpEmbeddingClient {
    client: Client,
    base_url: String,
}

impl HttpEmbeddingClient {
    /// Create a client against the given base URL (no trailing slash).
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl std::fmt::Debug for HttpEmbeddingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpEmbeddingClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl EmbeddingClassifier for HttpEmbeddingClient {
    async fn classify(&self, text: &str, intent_ids: &[String]) -> Result<Vec<EmbeddingScore>> {
        if intent_ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/api/intents/classify-embedding", self.base_url);
        let request = ClassifyRequest { text, intent_ids };

        let response = match self.client.post(&url).json(&request).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("embedding classify transport failure: {e}");
                return Ok(Vec::new());
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("embedding classify returned {status}, degrading to empty candidate list");
            return Ok(Vec::new());
        }

        let body = response.text().await.map_err(SibylError::from)?;
        let parsed: ClassifyResponse = serde_json::from_str(&body).map_err(|e| {
            SibylError::serialization(format!("malformed embedding classify response: {e}"))
        })?;
        Ok(parsed.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let ids = vec!["a".to_string(), "b".to_string()];
        let request = ClassifyRequest {
            text: "vorrei la fattura",
            intent_ids: &ids,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["text"], "vorrei la fattura");
        assert_eq!(json["intentIds"][1], "b");
    }

    #[test]
    fn test_response_wire_shape() {
        let json = r#"{"top":[{"intentId":"x","score":0.9},{"intentId":"y","score":0.4}]}"#;
        let parsed: ClassifyResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.top.len(), 2);
        assert_eq!(parsed.top[0].intent_id, "x");
        assert_eq!(parsed.top[0].score, 0.9);
    }

    #[test]
    fn test_response_rejects_duck_typed_ids() {
        // The legacy endpoint sometimes emitted "id" instead of
        // "intentId"; the canonical schema fails loudly instead of
        // probing both.
        let json = r#"{"top":[{"id":"x","score":0.9}]}"#;
        assert!(serde_json::from_str::<ClassifyResponse>(json).is_err());
    }
}
