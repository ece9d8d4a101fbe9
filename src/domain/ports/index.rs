//! Vector index port.
//!
//! The nearest-neighbor structure is a prebuilt artifact supplied by an
//! external pipeline; the retrieval core only needs this one search seam.

use crate::domain::errors::RetrievalError;

/// One hit from a nearest-neighbor search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Position of the reference vector inside the index, which is also
    /// the position of its aligned answer in the answer table.
    pub position: usize,
    /// Squared Euclidean distance from the query to the reference vector.
    pub distance: f32,
}

/// Trait for prebuilt nearest-neighbor indexes.
///
/// Indexes are immutable after load and shared read-only across
/// concurrent queries, so no interior synchronization is required.
pub trait VectorIndex: std::fmt::Debug + Send + Sync {
    /// Number of reference vectors in the index.
    fn len(&self) -> usize;

    /// Whether the index holds no reference vectors.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimensionality the index was built with.
    fn dimension(&self) -> usize;

    /// Return up to `k` nearest reference vectors for `query`, closest
    /// first. An empty index yields an empty result set.
    ///
    /// Fails with [`RetrievalError::DimensionMismatch`] when the query
    /// vector's length does not match [`Self::dimension`].
    fn search(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>, RetrievalError>;
}
