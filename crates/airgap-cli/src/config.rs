use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

const LOCAL_CONFIG: &str = "airgap.toml";

/// Session defaults read from `airgap.toml`. Command-line flags win over these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Snapshot file used when `--catalog` is not given
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Type selector active at session start
    #[serde(default, rename = "type")]
    pub type_selector: Option<String>,
    /// Trust filters active at session start
    #[serde(default)]
    pub filters: Vec<String>,
}

pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".airgap").join("config.toml"))
}

/// Load config from `explicit`, else `./airgap.toml`, else the per-user file.
/// Missing files mean defaults; unreadable or invalid ones are errors.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<CliConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let candidates = std::iter::once(PathBuf::from(LOCAL_CONFIG)).chain(user_config_path());
    for path in candidates {
        if path.is_file() {
            return read_config(&path);
        }
    }
    Ok(CliConfig::default())
}

pub fn read_config(path: &Path) -> anyhow::Result<CliConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: CliConfig =
        toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
