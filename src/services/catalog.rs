//! Domain catalog: resolves a domain to its (index, answer table) pair.

use std::collections::HashMap;

use crate::domain::errors::RetrievalError;
use crate::domain::models::{AnswerTable, Domain};
use crate::domain::ports::VectorIndex;

/// Process-wide, read-only mapping from [`Domain`] to its prebuilt
/// vector index and aligned answer table.
///
/// Built once at startup from two independent load operations (one per
/// domain) and never mutated afterwards, so it can be shared freely
/// across concurrent queries. There is no merging and no cross-domain
/// fallback.
#[derive(Default)]
pub struct DomainCatalog {
    entries: HashMap<Domain, CatalogEntry>,
}

struct CatalogEntry {
    index: Box<dyn VectorIndex>,
    answers: AnswerTable,
}

impl DomainCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a domain's artifacts, validating the alignment
    /// invariants the rest of the core relies on.
    ///
    /// Fails with [`RetrievalError::Configuration`] when the answer
    /// table length does not match the index's vector count, or when
    /// the index dimensionality does not match `encoder_dimension`.
    /// Such a domain must not be offered to users until corrected.
    pub fn insert(
        &mut self,
        domain: Domain,
        index: Box<dyn VectorIndex>,
        answers: AnswerTable,
        encoder_dimension: usize,
    ) -> Result<(), RetrievalError> {
        if answers.len() != index.len() {
            return Err(RetrievalError::Configuration(format!(
                "{domain}: answer table has {} entries but index holds {} vectors",
                answers.len(),
                index.len()
            )));
        }

        if index.dimension() != encoder_dimension {
            return Err(RetrievalError::Configuration(format!(
                "{domain}: index dimensionality {} does not match encoder dimensionality {}",
                index.dimension(),
                encoder_dimension
            )));
        }

        tracing::info!(
            %domain,
            vectors = index.len(),
            dimension = index.dimension(),
            "domain registered"
        );

        self.entries.insert(domain, CatalogEntry { index, answers });
        Ok(())
    }

    /// Resolve a domain to its (index, answer table) pair.
    ///
    /// Fails with [`RetrievalError::Configuration`] when the domain was
    /// never loaded; such domains are not served.
    pub fn resolve(
        &self,
        domain: Domain,
    ) -> Result<(&dyn VectorIndex, &AnswerTable), RetrievalError> {
        self.entries
            .get(&domain)
            .map(|entry| (entry.index.as_ref(), &entry.answers))
            .ok_or_else(|| {
                RetrievalError::Configuration(format!("domain {domain} is not loaded"))
            })
    }

    /// Domains currently available for serving, in stable order.
    pub fn domains(&self) -> Vec<Domain> {
        Domain::ALL
            .into_iter()
            .filter(|d| self.entries.contains_key(d))
            .collect()
    }

    /// Whether a domain is available for serving.
    pub fn contains(&self, domain: Domain) -> bool {
        self.entries.contains_key(&domain)
    }
}
