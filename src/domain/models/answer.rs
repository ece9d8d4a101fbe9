//! Answer table and retrieval result models.

use serde::{Deserialize, Serialize};

/// Ordered sequence of precomputed answer strings, positionally aligned
/// with a domain's vector index: the i-th reference vector's answer is
/// entry i of this table.
///
/// Loaded once at startup and read-only afterwards. The alignment
/// invariant (`table.len() == index.len()`) is enforced when the domain
/// catalog is built, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerTable {
    answers: Vec<String>,
}

impl AnswerTable {
    /// Create a table from an ordered list of answers.
    pub fn new(answers: Vec<String>) -> Self {
        Self { answers }
    }

    /// Number of answers in the table.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether the table holds no answers.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Answer at a reference-vector position, if in range.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.answers.get(position).map(String::as_str)
    }

    /// Iterate over all answers in positional order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.answers.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for AnswerTable {
    fn from(answers: Vec<String>) -> Self {
        Self::new(answers)
    }
}

/// Outcome of a single k=1 retrieval: the best match's distance and its
/// aligned answer text. Ephemeral; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrievalMatch {
    /// Squared Euclidean distance from the query embedding to the
    /// matched reference vector. Smaller means more similar.
    pub distance: f32,
    /// The precomputed answer aligned with the matched vector.
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_lookup() {
        let table = AnswerTable::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1), Some("b"));
        assert_eq!(table.get(2), None);
    }

    #[test]
    fn test_empty_table() {
        let table = AnswerTable::new(vec![]);
        assert!(table.is_empty());
        assert_eq!(table.get(0), None);
    }
}
