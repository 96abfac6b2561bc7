use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::link::APP_TITLE;

/// Global configuration loaded from `~/.config/linkgopher/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkGopherConfig {
    /// Title printed in front of every message.
    pub title: String,
    /// Copy the converted link back to the clipboard when the input was read from it.
    pub copy_to_clipboard: bool,
}

impl Default for LinkGopherConfig {
    fn default() -> Self {
        Self {
            title: APP_TITLE.to_string(),
            copy_to_clipboard: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkgopher")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkGopherConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`], for an explicit file location.
pub fn load_or_init_at(path: &Path) -> Result<LinkGopherConfig> {
    if !path.exists() {
        let default_cfg = LinkGopherConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LinkGopherConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
