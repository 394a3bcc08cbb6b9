use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::rules::validation::FieldRules;
use crate::platform::desktop::paths::default_config_path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    pub bind_addr: SocketAddr,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8787)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rules: FieldRules,
    pub log_filter: String,
    pub edge: EdgeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rules: FieldRules::default(),
            log_filter: "info".to_string(),
            edge: EdgeConfig::default(),
        }
    }
}

impl AppConfig {
    /// A missing file means defaults; a present but malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    pub fn load_default() -> Result<Self> {
        Self::load(&default_config_path()?)
    }
}
