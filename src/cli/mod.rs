//! CLI layer: argument parsing, command dispatch, presentation glue.
//!
//! Everything conversational lives here (greeting detection, chat
//! transcripts); the retrieval core below stays a pure function of
//! (text, domain).

pub mod commands;
pub mod service;
mod types;

pub use types::{Cli, Commands};

/// Case-insensitive greeting-keyword containment check.
///
/// Presentation glue, deliberately kept out of the retrieval core:
/// greeting-only inputs get a fixed reply without touching the encoder
/// or any index.
pub fn is_greeting(text: &str, greetings: &[String]) -> bool {
    let lowered = text.to_lowercase();
    greetings
        .iter()
        .any(|keyword| lowered.contains(&keyword.to_lowercase()))
}

/// Print a top-level error and exit nonzero.
///
/// Per-query errors never reach this; only startup failures (bad
/// config, missing artifacts) and encoder outages do.
pub fn handle_error(err: &anyhow::Error, json: bool) {
    if json {
        let payload = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{payload}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
