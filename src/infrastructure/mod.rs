//! Infrastructure layer: concrete adapters behind the domain ports.

pub mod config;
pub mod embedding;
pub mod index;
