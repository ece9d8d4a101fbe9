//! Index and answer-table artifact I/O.
//!
//! Both artifacts are produced by the external index-building pipeline;
//! this module only reads them at startup. The writers exist for tests
//! and operational tooling that needs to stage artifacts.
//!
//! Index artifact layout (little-endian):
//! magic `AGMI` | u32 format version | u32 dimension | u32 vector count
//! followed by `count * dimension` f32 values, row-major.
//!
//! The answer table is a JSON array of strings, positionally aligned
//! with the index.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::domain::models::AnswerTable;
use crate::domain::ports::VectorIndex;
use crate::infrastructure::index::FlatIndex;

const MAGIC: [u8; 4] = *b"AGMI";
const FORMAT_VERSION: u32 = 1;
const HEADER_LEN: usize = 16;

/// Load a vector index artifact from disk.
pub fn load_index(path: impl AsRef<Path>) -> Result<FlatIndex> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read index artifact {}", path.display()))?;
    parse_index(&bytes).with_context(|| format!("Malformed index artifact {}", path.display()))
}

fn parse_index(bytes: &[u8]) -> Result<FlatIndex> {
    if bytes.len() < HEADER_LEN {
        bail!("artifact shorter than header ({} bytes)", bytes.len());
    }
    if bytes[0..4] != MAGIC {
        bail!("bad magic; not an index artifact");
    }

    let version = read_u32(&bytes[4..8]);
    if version != FORMAT_VERSION {
        bail!("unsupported format version {version} (expected {FORMAT_VERSION})");
    }

    let dimension = read_u32(&bytes[8..12]) as usize;
    let count = read_u32(&bytes[12..16]) as usize;
    if dimension == 0 {
        bail!("dimension must be nonzero");
    }

    let expected = count
        .checked_mul(dimension)
        .and_then(|floats| floats.checked_mul(4))
        .context("vector payload size overflows")?;
    let payload = &bytes[HEADER_LEN..];
    if payload.len() != expected {
        bail!(
            "payload holds {} bytes, header promises {expected} ({count} x {dimension} f32)",
            payload.len()
        );
    }

    let mut index = FlatIndex::new(dimension);
    let mut row = vec![0.0f32; dimension];
    for chunk in payload.chunks_exact(dimension * 4) {
        for (value, quad) in row.iter_mut().zip(chunk.chunks_exact(4)) {
            *value = f32::from_le_bytes([quad[0], quad[1], quad[2], quad[3]]);
        }
        index.push(&row)?;
    }

    Ok(index)
}

fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Write a vector index artifact to disk.
pub fn write_index(path: impl AsRef<Path>, index: &FlatIndex) -> Result<()> {
    let path = path.as_ref();
    let dimension = u32::try_from(index.dimension()).context("dimension exceeds u32")?;
    let count = u32::try_from(index.len()).context("vector count exceeds u32")?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + index.len() * index.dimension() * 4);
    bytes.extend_from_slice(&MAGIC);
    bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    bytes.extend_from_slice(&dimension.to_le_bytes());
    bytes.extend_from_slice(&count.to_le_bytes());
    for position in 0..index.len() {
        // Positions below len always resolve; the unwrap-free lookup
        // keeps the loop total regardless.
        if let Some(row) = index.vector(position) {
            for value in row {
                bytes.extend_from_slice(&value.to_le_bytes());
            }
        }
    }

    fs::write(path, bytes)
        .with_context(|| format!("Failed to write index artifact {}", path.display()))
}

/// Load an answer table artifact (JSON array of strings) from disk.
pub fn load_answers(path: impl AsRef<Path>) -> Result<AnswerTable> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answer table {}", path.display()))?;
    let answers: Vec<String> = serde_json::from_str(&raw)
        .with_context(|| format!("Malformed answer table {}", path.display()))?;
    Ok(AnswerTable::new(answers))
}

/// Write an answer table artifact to disk.
pub fn write_answers(path: impl AsRef<Path>, answers: &AnswerTable) -> Result<()> {
    let path = path.as_ref();
    let entries: Vec<&str> = answers.iter().collect();
    let raw = serde_json::to_string_pretty(&entries).context("Failed to serialize answers")?;
    fs::write(path, raw)
        .with_context(|| format!("Failed to write answer table {}", path.display()))
}
