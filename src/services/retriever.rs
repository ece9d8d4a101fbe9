//! k=1 nearest-neighbor retrieval against a domain's index.

use crate::domain::errors::RetrievalError;
use crate::domain::models::{AnswerTable, RetrievalMatch};
use crate::domain::ports::VectorIndex;

/// Retrieve the single closest precomputed answer for a query embedding.
///
/// Stateless and idempotent: repeated calls with identical inputs yield
/// identical outputs, since the index is immutable after load. This
/// function does not apply the similarity threshold; that decision
/// belongs to the caller.
///
/// Fails with [`RetrievalError::IndexLookup`] when the search yields no
/// usable position (empty index, or a position outside the answer
/// table), rather than indexing out of range.
pub fn retrieve(
    query: &[f32],
    index: &dyn VectorIndex,
    answers: &AnswerTable,
) -> Result<RetrievalMatch, RetrievalError> {
    let neighbors = index.search(query, 1)?;

    let best = neighbors.first().ok_or_else(|| {
        RetrievalError::IndexLookup("nearest-neighbor search returned no match".to_string())
    })?;

    let answer = answers.get(best.position).ok_or_else(|| {
        RetrievalError::IndexLookup(format!(
            "position {} out of bounds for answer table of length {}",
            best.position,
            answers.len()
        ))
    })?;

    tracing::debug!(
        position = best.position,
        distance = best.distance,
        "retrieved nearest answer"
    );

    Ok(RetrievalMatch {
        distance: best.distance,
        answer: answer.to_string(),
    })
}
