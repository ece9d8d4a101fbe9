//! Question-answering service: the sole caller-facing entry point.
//!
//! Composes encode -> retrieve -> threshold decision into a response
//! string. The service holds no per-query state and no conversation
//! history; each call is a pure function of (text, domain) against the
//! immutable catalog.

use std::sync::Arc;

use crate::domain::errors::RetrievalError;
use crate::domain::models::{Config, Domain, ResponsesConfig};
use crate::domain::ports::QueryEncoder;
use crate::services::catalog::DomainCatalog;
use crate::services::retriever::retrieve;

/// Retrieval-backed question answering over the loaded domains.
pub struct QaService {
    encoder: Arc<dyn QueryEncoder>,
    catalog: Arc<DomainCatalog>,
    threshold: f32,
    responses: ResponsesConfig,
}

impl std::fmt::Debug for QaService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QaService")
            .field("threshold", &self.threshold)
            .field("responses", &self.responses)
            .finish_non_exhaustive()
    }
}

impl QaService {
    /// Build the service from its read-only collaborators.
    pub fn new(encoder: Arc<dyn QueryEncoder>, catalog: Arc<DomainCatalog>, config: &Config) -> Self {
        Self {
            encoder,
            catalog,
            threshold: config.similarity_threshold,
            responses: config.responses.clone(),
        }
    }

    /// The catalog this service answers from.
    pub fn catalog(&self) -> &DomainCatalog {
        &self.catalog
    }

    /// The similarity threshold applied to every query.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Fixed response strings used by the presentation layer.
    pub fn responses(&self) -> &ResponsesConfig {
        &self.responses
    }

    /// Answer a single question from the given domain.
    ///
    /// Returns the matched answer when the best match's squared distance
    /// is at or below the threshold (inclusive), with the fixed medical
    /// disclaimer appended for the medical domain; the fixed "not found"
    /// string when the distance is above the threshold; and a distinct
    /// generic-failure string when the index search itself fails. Only
    /// encoding failures and unloaded domains surface as errors, and
    /// both are scoped to this single query.
    pub async fn answer_query(
        &self,
        text: &str,
        domain: Domain,
    ) -> Result<String, RetrievalError> {
        let query = self.encoder.encode(text).await?;
        let (index, answers) = self.catalog.resolve(domain)?;

        match retrieve(&query, index, answers) {
            Ok(result) if result.distance <= self.threshold => {
                tracing::info!(%domain, distance = result.distance, "query matched");
                let mut response = result.answer;
                if domain.requires_disclaimer() {
                    response.push_str(&format!(
                        "\n\n_({})_",
                        self.responses.medical_disclaimer
                    ));
                }
                Ok(response)
            }
            Ok(result) => {
                tracing::info!(
                    %domain,
                    distance = result.distance,
                    threshold = self.threshold,
                    "best match above threshold"
                );
                Ok(self.responses.not_found.clone())
            }
            Err(RetrievalError::IndexLookup(reason)) => {
                // Degraded, not fatal: the user gets a generic failure
                // message distinguishable from the ordinary "not found".
                tracing::warn!(%domain, %reason, "index lookup failed for query");
                Ok(self.responses.lookup_failure.clone())
            }
            Err(other) => Err(other),
        }
    }
}
