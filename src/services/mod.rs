//! Service layer: retrieval core and domain resolution.

pub mod catalog;
pub mod qa;
pub mod retriever;

pub use catalog::DomainCatalog;
pub use qa::QaService;
pub use retriever::retrieve;
