//! Handle the `init` command: write a starter configuration file.

use anyhow::{bail, Context, Result};

use crate::domain::models::Config;

const CONFIG_DIR: &str = ".agrimed";
const CONFIG_FILE: &str = ".agrimed/config.yaml";

/// Write `.agrimed/config.yaml` with the default configuration.
pub fn execute(force: bool, json: bool) -> Result<()> {
    let path = std::path::Path::new(CONFIG_FILE);
    if path.exists() && !force {
        bail!("{CONFIG_FILE} already exists (use --force to overwrite)");
    }

    std::fs::create_dir_all(CONFIG_DIR)
        .with_context(|| format!("Failed to create {CONFIG_DIR}"))?;

    let yaml = serde_yaml::to_string(&Config::default())
        .context("Failed to serialize default configuration")?;
    std::fs::write(path, yaml).with_context(|| format!("Failed to write {CONFIG_FILE}"))?;

    if json {
        println!("{}", serde_json::json!({ "created": CONFIG_FILE }));
    } else {
        println!("Wrote {CONFIG_FILE}. Point the domain artifact paths at your index files.");
    }

    Ok(())
}
