use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::host::HostItem;
use crate::provider::Provider;

/// A host item together with the provider whose item group it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEntry {
    #[serde(default)]
    pub provider: Provider,
    /// `host`, `host:port`, or `https://host/prefix`.
    pub item_spec: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl HostEntry {
    pub fn item(&self) -> HostItem {
        HostItem {
            item_spec: self.item_spec.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

/// Global configuration loaded from `~/.config/gitlab-sourcelink/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLinkConfig {
    /// Provider used when the CLI is not told otherwise.
    #[serde(default)]
    pub default_provider: Provider,
    /// Configured hosts, in lookup order.
    #[serde(default)]
    pub hosts: Vec<HostEntry>,
}

impl SourceLinkConfig {
    /// Host items of one provider's item group, in configuration order.
    pub fn host_items(&self, provider: Provider) -> Vec<HostItem> {
        self.hosts
            .iter()
            .filter(|h| h.provider == provider)
            .map(HostEntry::item)
            .collect()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gitlab-sourcelink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<SourceLinkConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: SourceLinkConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from `path`, writing a default file there if none exists.
pub fn load_or_init_at(path: &Path) -> Result<SourceLinkConfig> {
    if !path.exists() {
        let default_cfg = SourceLinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create dir: {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(path)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SourceLinkConfig> {
    load_or_init_at(&config_path()?)
}
