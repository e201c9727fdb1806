use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use checkit::config::CONFIG_FILE;

use crate::presets::DEFAULT_CONFIG;

pub fn run_init(force: bool) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{CONFIG_FILE} already exists. Use --force to overwrite the existing configuration."
        );
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write configuration to {}", config_path.display()))?;

    println!("{CONFIG_FILE} created at {}", config_path.display());
    Ok(())
}
