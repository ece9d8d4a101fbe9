//! Domain error types for the retrieval core.

use thiserror::Error;

/// Errors produced by the retrieval core.
///
/// Per-query failures (`ModelUnavailable`, `IndexLookup`, `DimensionMismatch`)
/// are scoped to a single query and must never take the serving process down.
/// `Configuration` is load-time only and is fatal for the affected domain.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// The embedding backend could not produce a vector for the query.
    /// Not retried silently; no partial or cached answer is substituted.
    #[error("Embedding model unavailable: {0}")]
    ModelUnavailable(String),

    /// The nearest-neighbor search returned no usable position for the
    /// answer table (empty index, sentinel position, or out of range).
    #[error("Index lookup failed: {0}")]
    IndexLookup(String),

    /// Query vector dimensionality does not match the index.
    #[error("Dimension mismatch: query has {query} dimensions, index expects {index}")]
    DimensionMismatch {
        /// Dimensionality of the query vector.
        query: usize,
        /// Dimensionality the index was built with.
        index: usize,
    },

    /// A domain's artifacts are missing, malformed, or inconsistent.
    #[error("Configuration error: {0}")]
    Configuration(String),
}
