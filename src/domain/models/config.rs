//! Configuration model for the agrimed service.

use serde::{Deserialize, Serialize};

use super::Domain;

/// Main configuration structure for agrimed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Maximum acceptable squared Euclidean distance for a confident
    /// match. Inclusive: a distance exactly equal to this value is
    /// served as a match. One global value across both domains.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f32,

    /// Query encoder configuration
    #[serde(default)]
    pub encoder: EncoderConfig,

    /// Per-domain artifact locations
    #[serde(default = "default_domain_artifacts")]
    pub domains: Vec<DomainArtifactsConfig>,

    /// Fixed response strings
    #[serde(default)]
    pub responses: ResponsesConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_similarity_threshold() -> f32 {
    15.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            encoder: EncoderConfig::default(),
            domains: default_domain_artifacts(),
            responses: ResponsesConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Artifact configuration for a domain, if one is configured.
    pub fn artifacts_for(&self, domain: Domain) -> Option<&DomainArtifactsConfig> {
        self.domains.iter().find(|d| d.domain == domain)
    }
}

/// Which embedding backend produces query vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncoderProvider {
    /// Deterministic local hash embedding (development and tests).
    Hash,
    /// Remote embedding server spoken to over HTTP.
    Http,
}

/// Query encoder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EncoderConfig {
    /// Embedding backend to use
    #[serde(default = "default_encoder_provider")]
    pub provider: EncoderProvider,

    /// Embedding dimensionality; must match the dimensionality the
    /// domain indexes were built with
    #[serde(default = "default_encoder_dimension")]
    pub dimension: usize,

    /// Embedding server endpoint (http provider only)
    #[serde(default = "default_encoder_endpoint")]
    pub endpoint: String,

    /// Per-request wall-clock budget in milliseconds (http provider
    /// only); an overrun is treated as the model being unavailable
    #[serde(default = "default_encoder_timeout_ms")]
    pub timeout_ms: u64,
}

const fn default_encoder_provider() -> EncoderProvider {
    EncoderProvider::Hash
}

const fn default_encoder_dimension() -> usize {
    384
}

fn default_encoder_endpoint() -> String {
    "http://127.0.0.1:8400/embed".to_string()
}

const fn default_encoder_timeout_ms() -> u64 {
    5000
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            provider: default_encoder_provider(),
            dimension: default_encoder_dimension(),
            endpoint: default_encoder_endpoint(),
            timeout_ms: default_encoder_timeout_ms(),
        }
    }
}

/// Artifact locations for one knowledge domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DomainArtifactsConfig {
    /// Which domain these artifacts serve
    pub domain: Domain,

    /// Path to the prebuilt vector index artifact
    pub index_path: String,

    /// Path to the aligned answer table (JSON array of strings)
    pub answers_path: String,
}

fn default_domain_artifacts() -> Vec<DomainArtifactsConfig> {
    vec![
        DomainArtifactsConfig {
            domain: Domain::Medical,
            index_path: "data/medical.index".to_string(),
            answers_path: "data/medical_answers.json".to_string(),
        },
        DomainArtifactsConfig {
            domain: Domain::Agricultural,
            index_path: "data/agricultural.index".to_string(),
            answers_path: "data/agricultural_answers.json".to_string(),
        },
    ]
}

/// Fixed response strings served around retrieved answers.
///
/// Defaults are the Burmese strings the product ships with; deployments
/// can override any of them in config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ResponsesConfig {
    /// Reply to greeting-only inputs (never touches the retrieval core)
    #[serde(default = "default_greeting_reply")]
    pub greeting_reply: String,

    /// Disclaimer appended to every accepted medical-domain answer
    #[serde(default = "default_medical_disclaimer")]
    pub medical_disclaimer: String,

    /// Served when the best match is above the similarity threshold
    #[serde(default = "default_not_found")]
    pub not_found: String,

    /// Served when the index search itself fails for a query; kept
    /// distinct from `not_found` for diagnosability
    #[serde(default = "default_lookup_failure")]
    pub lookup_failure: String,

    /// Keywords whose presence marks an input as a greeting
    #[serde(default = "default_greetings")]
    pub greetings: Vec<String>,
}

fn default_greeting_reply() -> String {
    "မင်္ဂလာပါခင်ဗျာ! ကျွန်တော်က ကျန်းမာရေးနဲ့ စိုက်ပျိုးရေးဆိုင်ရာ အကူအညီပေးတဲ့ AI ပါ။ ဘာများကူညီပေးရမလဲ?"
        .to_string()
}

fn default_medical_disclaimer() -> String {
    "ဤအချက်အလက်သည် အထွေထွေ သိရှိရန်သာဖြစ်ပြီး ဆရာဝန်အစား မဖြစ်ပါ။".to_string()
}

fn default_not_found() -> String {
    "တောင်းပန်ပါတယ်၊ အဲဒီအကြောင်းအရာနဲ့ ပတ်သက်ပြီး ကျွန်တော့် ဒေတာထဲမှာ မတွေ့ပါဘူး။".to_string()
}

fn default_lookup_failure() -> String {
    "Sorry, an internal lookup error prevented finding an answer. Please try again.".to_string()
}

fn default_greetings() -> Vec<String> {
    ["hi", "hello", "hey", "mingalabar", "မင်္ဂလာပါ", "နေကောင်းလား"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

impl Default for ResponsesConfig {
    fn default() -> Self {
        Self {
            greeting_reply: default_greeting_reply(),
            medical_disclaimer: default_medical_disclaimer(),
            not_found: default_not_found(),
            lookup_failure: default_lookup_failure(),
            greetings: default_greetings(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
