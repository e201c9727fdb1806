use std::path::Path;

use anyhow::{Context, Result};

use checkit::config::CheckitConfig;

pub fn run_serve(addr: Option<&str>, config_path: Option<&Path>, profile: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => CheckitConfig::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => CheckitConfig::load().context("Failed to load checkit.toml")?,
    };

    let mut config = match profile {
        Some(name) => config.with_profile(name),
        None => config,
    }
    .with_env()?;

    if let Some(addr) = addr {
        config.server.addr = addr.to_string();
    }
    config.validate()?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(checkit::server::run_server(config))
}
