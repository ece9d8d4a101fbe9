//! Domain models
//!
//! Pure data types with no infrastructure dependencies.

mod answer;
mod config;
#[allow(clippy::module_inception)]
mod domain;

pub use answer::{AnswerTable, RetrievalMatch};
pub use config::{
    Config, DomainArtifactsConfig, EncoderConfig, EncoderProvider, LoggingConfig, ResponsesConfig,
};
pub use domain::Domain;
