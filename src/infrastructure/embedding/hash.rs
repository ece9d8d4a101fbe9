//! Deterministic hash-based query encoder.
//!
//! Stands in for the external sentence-embedding model during
//! development and tests: same text always yields the same normalized
//! vector, with no model download or network dependency. Not a semantic
//! embedding; nearby texts do not map to nearby vectors.

use async_trait::async_trait;

use crate::domain::errors::RetrievalError;
use crate::domain::ports::QueryEncoder;

/// Local deterministic encoder producing unit-length vectors.
pub struct HashEncoder {
    dimension: usize,
}

impl HashEncoder {
    /// Create an encoder for the given dimensionality.
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn embed(&self, text: &str) -> Vec<f32> {
        let bytes = text.as_bytes();
        let mut vector = vec![0.0f32; self.dimension];

        // FNV-style accumulation seeded per component keeps components
        // decorrelated while staying reproducible.
        for (i, value) in vector.iter_mut().enumerate() {
            let mut acc: u64 = 0xcbf2_9ce4_8422_2325 ^ (i as u64);
            for &byte in bytes {
                acc ^= u64::from(byte);
                acc = acc.wrapping_mul(0x0000_0100_0000_01b3);
            }
            // Top 24 bits mapped into [-0.5, 0.5).
            *value = (acc >> 40) as f32 / 16_777_216.0 - 0.5;
        }

        // Accumulate the magnitude in f64 to avoid rounding drift at
        // higher dimensionalities.
        let magnitude = vector
            .iter()
            .map(|x| f64::from(*x) * f64::from(*x))
            .sum::<f64>()
            .sqrt() as f32;

        if magnitude > 1e-10 {
            for value in &mut vector {
                *value /= magnitude;
            }
        } else {
            // Degenerate input (e.g. empty text hashing to zero): fall
            // back to a uniform unit vector.
            let uniform = 1.0 / (self.dimension as f32).sqrt();
            vector.fill(uniform);
        }

        vector
    }
}

#[async_trait]
impl QueryEncoder for HashEncoder {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn encode(&self, text: &str) -> Result<Vec<f32>, RetrievalError> {
        Ok(self.embed(text))
    }
}
