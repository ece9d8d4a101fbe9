//! Handle the `domains` command: list loaded domains and index stats.

use std::path::Path;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::cli::service;
use crate::domain::ports::VectorIndex;

/// Show every configured domain with its artifact statistics.
pub fn execute(config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = service::load_config(config_path)?;
    let catalog = service::load_catalog(&config, config.encoder.dimension)?;

    if json {
        let rows: Vec<serde_json::Value> = config
            .domains
            .iter()
            .filter(|artifacts| catalog.contains(artifacts.domain))
            .map(|artifacts| {
                let (vector_count, answer_count) = catalog
                    .resolve(artifacts.domain)
                    .map(|(index, answers)| (index.len(), answers.len()))
                    .unwrap_or((0, 0));
                serde_json::json!({
                    "domain": artifacts.domain,
                    "vectors": vector_count,
                    "answers": answer_count,
                    "index_path": artifacts.index_path,
                    "answers_path": artifacts.answers_path,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Domain", "Vectors", "Dimension", "Index", "Answers"]);

    for artifacts in &config.domains {
        if let Ok((index, answers)) = catalog.resolve(artifacts.domain) {
            table.add_row(vec![
                artifacts.domain.to_string(),
                index.len().to_string(),
                index.dimension().to_string(),
                artifacts.index_path.clone(),
                format!("{} entries", answers.len()),
            ]);
        }
    }

    println!("{table}");
    println!(
        "\nSimilarity threshold: {} (squared Euclidean, inclusive)",
        config.similarity_threshold
    );

    Ok(())
}
