pub mod schema;
pub mod watcher;

pub use schema::{GraphConfig, ProbeConfig, SamplingConfig, SourcesConfig};
pub use watcher::ConfigWatcher;

use probe_core::{ProbeError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `ProbeConfig::default()` if
/// the file doesn't exist so the inspector always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<ProbeConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(ProbeConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| ProbeError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let config: ProbeConfig =
        toml::from_str(&raw).map_err(|e| ProbeError::Config(format!("TOML parse error: {e}")))?;
    tracing::debug!("Loaded config from '{}'", path.display());
    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("probe").join("probe.toml")
}
