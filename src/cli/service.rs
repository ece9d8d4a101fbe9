//! CLI wiring: builds the QA service from configuration.
//!
//! All load-time validation happens here, before any query is accepted.
//! A domain whose artifacts fail to load is fatal at startup, per the
//! error-handling policy.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::domain::models::{Config, EncoderConfig, EncoderProvider};
use crate::domain::ports::QueryEncoder;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::embedding::{HashEncoder, HttpEncoder};
use crate::infrastructure::index::{load_answers, load_index};
use crate::services::{DomainCatalog, QaService};

/// Load configuration, either from an explicit file or the standard
/// `.agrimed/` hierarchy.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Build the configured query encoder.
pub fn build_encoder(config: &EncoderConfig) -> Result<Arc<dyn QueryEncoder>> {
    let encoder: Arc<dyn QueryEncoder> = match config.provider {
        EncoderProvider::Hash => Arc::new(HashEncoder::new(config.dimension)),
        EncoderProvider::Http => Arc::new(HttpEncoder::new(
            config.endpoint.clone(),
            config.dimension,
            Duration::from_millis(config.timeout_ms),
        )?),
    };

    tracing::info!(
        backend = encoder.name(),
        dimension = encoder.dimension(),
        "query encoder ready"
    );
    Ok(encoder)
}

/// Load every configured domain's artifacts into a catalog.
pub fn load_catalog(config: &Config, encoder_dimension: usize) -> Result<DomainCatalog> {
    let mut catalog = DomainCatalog::new();

    for artifacts in &config.domains {
        let index = load_index(&artifacts.index_path)
            .with_context(|| format!("Failed to load index for domain {}", artifacts.domain))?;
        let answers = load_answers(&artifacts.answers_path).with_context(|| {
            format!("Failed to load answer table for domain {}", artifacts.domain)
        })?;

        catalog
            .insert(artifacts.domain, Box::new(index), answers, encoder_dimension)
            .with_context(|| format!("Invalid artifacts for domain {}", artifacts.domain))?;
    }

    Ok(catalog)
}

/// Build the full QA service: encoder + catalog + threshold decision.
pub fn build_qa_service(config: &Config) -> Result<QaService> {
    let encoder = build_encoder(&config.encoder)?;
    let catalog = load_catalog(config, encoder.dimension())?;
    Ok(QaService::new(encoder, Arc::new(catalog), config))
}
