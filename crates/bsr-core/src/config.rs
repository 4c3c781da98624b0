use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::fetch::PLAYLIST_ENDPOINT;

fn default_endpoint() -> String {
    PLAYLIST_ENDPOINT.to_string()
}

/// Global configuration loaded from `~/.config/bsr/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BsrConfig {
    /// Playlist feed URL (absolute http/https).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for BsrConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl BsrConfig {
    pub fn validate(&self) -> Result<()> {
        validate_endpoint(&self.endpoint)
    }
}

/// Accepts absolute `http` and `https` URLs only.
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint).with_context(|| format!("invalid endpoint {endpoint:?}"))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => bail!("unsupported endpoint scheme {other:?} in {endpoint:?}"),
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bsr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BsrConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<BsrConfig> {
    if !path.exists() {
        let default_cfg = BsrConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: BsrConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
