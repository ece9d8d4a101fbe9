//! Configuration loading and validation.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::{Config, Domain, EncoderProvider};

/// Configuration error types.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid similarity_threshold: {0}. Must be a finite, non-negative number")]
    InvalidThreshold(f32),

    #[error("Invalid encoder dimension: {0}. Must be at least 1")]
    InvalidDimension(usize),

    #[error("Encoder endpoint cannot be empty when the http provider is selected")]
    EmptyEndpoint,

    #[error("Invalid encoder timeout: {0}ms. Must be positive")]
    InvalidTimeout(u64),

    #[error("Domain {0} configured more than once")]
    DuplicateDomain(Domain),

    #[error("Domain {0}: artifact path cannot be empty")]
    EmptyArtifactPath(Domain),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Response string `{0}` cannot be empty")]
    EmptyResponse(&'static str),
}

/// Configuration loader with hierarchical merging.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .agrimed/config.yaml (project config)
    /// 3. .agrimed/local.yaml (local overrides, optional)
    /// 4. Environment variables (AGRIMED_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".agrimed/config.yaml"))
            .merge(Yaml::file(".agrimed/local.yaml"))
            .merge(Env::prefixed("AGRIMED_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if !config.similarity_threshold.is_finite() || config.similarity_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(config.similarity_threshold));
        }

        if config.encoder.dimension == 0 {
            return Err(ConfigError::InvalidDimension(config.encoder.dimension));
        }

        if config.encoder.timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout(config.encoder.timeout_ms));
        }

        if config.encoder.provider == EncoderProvider::Http
            && config.encoder.endpoint.trim().is_empty()
        {
            return Err(ConfigError::EmptyEndpoint);
        }

        let mut seen = Vec::new();
        for artifacts in &config.domains {
            if seen.contains(&artifacts.domain) {
                return Err(ConfigError::DuplicateDomain(artifacts.domain));
            }
            seen.push(artifacts.domain);

            if artifacts.index_path.is_empty() || artifacts.answers_path.is_empty() {
                return Err(ConfigError::EmptyArtifactPath(artifacts.domain));
            }
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if config.responses.not_found.is_empty() {
            return Err(ConfigError::EmptyResponse("not_found"));
        }
        if config.responses.lookup_failure.is_empty() {
            return Err(ConfigError::EmptyResponse("lookup_failure"));
        }
        if config.responses.medical_disclaimer.is_empty() {
            return Err(ConfigError::EmptyResponse("medical_disclaimer"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{EncoderConfig, EncoderProvider, LoggingConfig};
    use std::io::Write;

    #[test]
    fn test_defaults_validate() {
        assert!(ConfigLoader::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let config = Config {
            similarity_threshold: -1.0,
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let config = Config {
            similarity_threshold: f32::NAN,
            ..Config::default()
        };
        assert!(ConfigLoader::validate(&config).is_err());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let config = Config {
            encoder: EncoderConfig {
                dimension: 0,
                ..EncoderConfig::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidDimension(0))
        ));
    }

    #[test]
    fn test_http_requires_endpoint() {
        let config = Config {
            encoder: EncoderConfig {
                provider: EncoderProvider::Http,
                endpoint: "  ".to_string(),
                ..EncoderConfig::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyEndpoint)
        ));
    }

    #[test]
    fn test_duplicate_domain_rejected() {
        let base = Config::default();
        let mut domains = base.domains.clone();
        domains.push(domains[0].clone());
        let config = Config { domains, ..base };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::DuplicateDomain(_))
        ));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let config = Config {
            logging: LoggingConfig {
                level: "verbose".to_string(),
                ..LoggingConfig::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "similarity_threshold: 7.5").unwrap();
        writeln!(file, "encoder:").unwrap();
        writeln!(file, "  dimension: 128").unwrap();

        let config = ConfigLoader::load_from_file(file.path()).unwrap();
        assert!((config.similarity_threshold - 7.5).abs() < f32::EPSILON);
        assert_eq!(config.encoder.dimension, 128);
        // Untouched sections keep their defaults.
        assert_eq!(config.domains.len(), 2);
    }

    #[test]
    fn test_load_from_file_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "similarity_threshold: -3.0").unwrap();
        assert!(ConfigLoader::load_from_file(file.path()).is_err());
    }
}
