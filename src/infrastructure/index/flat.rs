//! Flat (brute-force) vector index.
//!
//! Exhaustive squared-Euclidean scan over contiguous f32 storage. For
//! the answer-table sizes this system serves (hundreds to low thousands
//! of reference vectors) a flat scan is both the simplest and the
//! fastest structure without an extra index build step.

use crate::domain::errors::RetrievalError;
use crate::domain::ports::{Neighbor, VectorIndex};

/// Immutable-after-load flat index over reference vectors.
#[derive(Debug, Clone)]
pub struct FlatIndex {
    dimension: usize,
    // Row-major: vector i occupies [i * dimension, (i + 1) * dimension).
    values: Vec<f32>,
}

impl FlatIndex {
    /// Create an empty index for the given dimensionality.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            values: Vec::new(),
        }
    }

    /// Build an index from a list of reference vectors.
    ///
    /// Fails with [`RetrievalError::Configuration`] when any vector's
    /// length differs from `dimension`.
    pub fn from_vectors(
        dimension: usize,
        vectors: Vec<Vec<f32>>,
    ) -> Result<Self, RetrievalError> {
        let mut index = Self::new(dimension);
        for vector in vectors {
            index.push(&vector)?;
        }
        Ok(index)
    }

    /// Append one reference vector. Only used while building; once the
    /// index is handed to the catalog it is never mutated again.
    pub fn push(&mut self, vector: &[f32]) -> Result<(), RetrievalError> {
        if vector.len() != self.dimension {
            return Err(RetrievalError::Configuration(format!(
                "reference vector has {} dimensions, index expects {}",
                vector.len(),
                self.dimension
            )));
        }
        self.values.extend_from_slice(vector);
        Ok(())
    }

    /// Reference vector at a position, if in range.
    pub fn vector(&self, position: usize) -> Option<&[f32]> {
        let start = position.checked_mul(self.dimension)?;
        let end = start.checked_add(self.dimension)?;
        self.values.get(start..end)
    }

    fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.values.chunks_exact(self.dimension)
    }
}

/// Squared Euclidean distance between two equal-length vectors.
pub fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum()
}

impl VectorIndex for FlatIndex {
    fn len(&self) -> usize {
        if self.dimension == 0 {
            0
        } else {
            self.values.len() / self.dimension
        }
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn search(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>, RetrievalError> {
        if query.len() != self.dimension {
            return Err(RetrievalError::DimensionMismatch {
                query: query.len(),
                index: self.dimension,
            });
        }
        if self.is_empty() {
            return Ok(Vec::new());
        }

        let mut neighbors: Vec<Neighbor> = self
            .rows()
            .enumerate()
            .map(|(position, row)| Neighbor {
                position,
                distance: squared_l2(query, row),
            })
            .collect();

        neighbors.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        neighbors.truncate(k);

        Ok(neighbors)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn vector_strategy(dim: usize) -> impl Strategy<Value = Vec<f32>> {
        prop::collection::vec(-10.0f32..10.0f32, dim..=dim)
    }

    proptest! {
        /// Distance from a vector to itself is zero.
        #[test]
        fn proptest_distance_identity(v in vector_strategy(16)) {
            prop_assert!(squared_l2(&v, &v).abs() < 1e-5);
        }

        /// Squared distance is symmetric and never negative.
        #[test]
        fn proptest_distance_symmetric_nonnegative(
            a in vector_strategy(16),
            b in vector_strategy(16)
        ) {
            let ab = squared_l2(&a, &b);
            let ba = squared_l2(&b, &a);
            prop_assert!(ab >= 0.0);
            prop_assert!((ab - ba).abs() < 1e-3);
        }

        /// k=1 search returns the row a linear scan would pick.
        #[test]
        fn proptest_search_matches_linear_scan(
            rows in prop::collection::vec(vector_strategy(4), 1..20),
            query in vector_strategy(4)
        ) {
            let index = FlatIndex::from_vectors(4, rows.clone()).unwrap();
            let best = index.search(&query, 1).unwrap()[0];

            let scan_best = rows
                .iter()
                .map(|row| squared_l2(&query, row))
                .fold(f32::INFINITY, f32::min);
            prop_assert!((best.distance - scan_best).abs() < 1e-4);
        }

        /// Results come back sorted, closest first.
        #[test]
        fn proptest_search_sorted(
            rows in prop::collection::vec(vector_strategy(4), 1..20),
            query in vector_strategy(4)
        ) {
            let index = FlatIndex::from_vectors(4, rows).unwrap();
            let neighbors = index.search(&query, usize::MAX).unwrap();
            for pair in neighbors.windows(2) {
                prop_assert!(pair[0].distance <= pair[1].distance);
            }
        }
    }
}
