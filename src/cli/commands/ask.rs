//! Handle the `ask` command: one question, one response.

use std::path::Path;

use anyhow::Result;

use crate::cli::{is_greeting, service};
use crate::domain::models::Domain;

/// Execute a single-shot question against the chosen domain.
pub async fn execute(
    question: String,
    domain: Domain,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let config = service::load_config(config_path)?;
    let qa = service::build_qa_service(&config)?;

    let response = if is_greeting(&question, &qa.responses().greetings) {
        qa.responses().greeting_reply.clone()
    } else {
        qa.answer_query(&question, domain).await?
    };

    if json {
        let payload = serde_json::json!({
            "domain": domain,
            "question": question,
            "response": response,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{response}");
    }

    Ok(())
}
