//! Engine configuration loading

use anyhow::{Context, Result};
use checklist_core::EngineConfig;
use std::path::Path;

/// Load engine settings from an optional TOML file
///
/// Missing keys keep their defaults. The result is validated.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = parse_config(&raw).with_context(|| format!("invalid config {}", path.display()))?;

    tracing::debug!("Loaded engine config from {}", path.display());
    Ok(config)
}

/// Parse and validate TOML engine settings
pub fn parse_config(raw: &str) -> Result<EngineConfig> {
    let config: EngineConfig = toml::from_str(raw).context("failed to parse TOML")?;
    config.validate()?;
    Ok(config)
}
