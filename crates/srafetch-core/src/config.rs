use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::run_url::DEFAULT_BASE_URL;

/// Global configuration loaded from `~/.config/srafetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SraFetchConfig {
    /// Base URL of the record endpoint; the accession is appended as the
    /// `run` query value.
    pub base_url: String,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SraFetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 60,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("srafetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SraFetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SraFetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SraFetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
