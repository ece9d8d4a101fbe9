//! HTTP query encoder talking to a remote embedding server.
//!
//! The embedding model runs out of process (typically a sentence
//! transformer behind a small HTTP shim). The contract is one POST per
//! query: `{"text": "..."}` in, `{"embedding": [...]}` out. Any
//! transport, status, or shape failure maps to `ModelUnavailable` and
//! is never retried here.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::RetrievalError;
use crate::domain::ports::QueryEncoder;

#[derive(Serialize)]
struct EmbedRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: Vec<f32>,
}

/// Encoder backed by a remote embedding endpoint.
pub struct HttpEncoder {
    client: reqwest::Client,
    endpoint: String,
    dimension: usize,
}

impl HttpEncoder {
    /// Create an encoder for the given endpoint.
    ///
    /// `timeout` is the per-request wall-clock budget; an overrun is
    /// reported as the model being unavailable.
    pub fn new(
        endpoint: String,
        dimension: usize,
        timeout: Duration,
    ) -> Result<Self, RetrievalError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                RetrievalError::Configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint,
            dimension,
        })
    }
}

#[async_trait]
impl QueryEncoder for HttpEncoder {
    fn name(&self) -> &'static str {
        "http"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn encode(&self, text: &str) -> Result<Vec<f32>, RetrievalError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&EmbedRequest { text })
            .send()
            .await
            .map_err(|e| RetrievalError::ModelUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::ModelUnavailable(format!(
                "embedding server returned {status}"
            )));
        }

        let body: EmbedResponse = response
            .json()
            .await
            .map_err(|e| RetrievalError::ModelUnavailable(format!("malformed response: {e}")))?;

        if body.embedding.len() != self.dimension {
            return Err(RetrievalError::DimensionMismatch {
                query: body.embedding.len(),
                index: self.dimension,
            });
        }

        Ok(body.embedding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_server_is_model_unavailable() {
        // Reserved TEST-NET-1 address; connection fails fast.
        let encoder = HttpEncoder::new(
            "http://192.0.2.1:1/embed".to_string(),
            4,
            Duration::from_millis(200),
        )
        .unwrap();

        let err = encoder.encode("anything").await.unwrap_err();
        assert!(matches!(err, RetrievalError::ModelUnavailable(_)));
    }

    #[test]
    fn test_reports_configured_dimension() {
        let encoder = HttpEncoder::new(
            "http://localhost:8400/embed".to_string(),
            384,
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(encoder.dimension(), 384);
        assert_eq!(encoder.name(), "http");
    }
}
