use anyhow::{Context, Result};
use std::path::Path;

/// Read a conventions file from an explicit path.
///
/// There is no implicit lookup: the host decides where conventions live.
pub fn read_config_file(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(content)
}
