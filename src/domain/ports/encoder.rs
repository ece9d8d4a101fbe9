//! Query encoder port.
//!
//! Defines the trait for the external embedding model that converts raw
//! question text into a fixed-length vector. The model itself is an
//! external collaborator; this crate only integrates against this seam.

use async_trait::async_trait;

use crate::domain::errors::RetrievalError;

/// Trait for query encoders.
///
/// Implementations must be deterministic for a fixed model version: the
/// same text always yields the same vector. Encoding has no side effects
/// and implementations must be safe to share across concurrent queries.
#[async_trait]
pub trait QueryEncoder: Send + Sync {
    /// Backend name (e.g., "hash", "http").
    fn name(&self) -> &'static str;

    /// Embedding dimensionality for this encoder. Must match the
    /// dimensionality the domain indexes were built with.
    fn dimension(&self) -> usize;

    /// Encode a question into an embedding vector.
    ///
    /// Fails with [`RetrievalError::ModelUnavailable`] when the backing
    /// model cannot produce a vector. Callers must not retry silently;
    /// no answer can be produced without an embedding.
    async fn encode(&self, text: &str) -> Result<Vec<f32>, RetrievalError>;
}
