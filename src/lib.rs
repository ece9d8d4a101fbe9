//! Agrimed - Retrieval-based QA chatbot
//!
//! A single-turn question-answering system for medical and agricultural
//! questions. Each query is encoded into a vector embedding, matched
//! against a prebuilt per-domain nearest-neighbor index, and answered
//! with the closest precomputed string when the squared-Euclidean
//! distance falls within a fixed threshold, or with a fixed fallback
//! otherwise. There is no generative model and no multi-turn state.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): pure models, ports, and errors
//! - **Service Layer** (`services`): retrieval core and domain catalog
//! - **Infrastructure Layer** (`infrastructure`): index, encoders,
//!   artifact I/O, configuration
//! - **CLI Layer** (`cli`): command-line interface and chat glue
//!
//! # Example
//!
//! ```ignore
//! use agrimed::cli::service;
//! use agrimed::domain::models::Domain;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = service::load_config(None)?;
//!     let qa = service::build_qa_service(&config)?;
//!     let answer = qa.answer_query("ဖျားနာလျှင် ဘာလုပ်ရမလဲ", Domain::Medical).await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::RetrievalError;
pub use domain::models::{AnswerTable, Config, Domain, RetrievalMatch};
pub use domain::ports::{Neighbor, QueryEncoder, VectorIndex};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::embedding::{HashEncoder, HttpEncoder};
pub use infrastructure::index::FlatIndex;
pub use services::{DomainCatalog, QaService};
