//! Tech Atlas configuration with TOML persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::filter::FilterLogic;
use crate::types::{AtlasError, AtlasResult};

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// Navigation session configuration
    pub session: SessionConfig,

    /// Navigation engine configuration
    pub navigation: NavigationConfig,

    /// Catalog source for the CLI
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Capacity of each of the back and forward stacks
    pub max_history: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Combinator used when a command does not name one
    pub default_logic: FilterLogic,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog (array of tech objects)
    pub path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { max_history: 100 }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            default_logic: FilterLogic::And,
        }
    }
}

impl AtlasConfig {
    /// Load from TOML file
    pub fn load(path: &Path) -> AtlasResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| AtlasError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save to TOML file
    pub fn save(&self, path: &Path) -> AtlasResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| AtlasError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default config file location.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tech-atlas")
            .join("config.toml")
    }

    /// Load from default location or fall back to defaults
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                if path.exists() {
                    log::warn!("Ignoring unreadable config: {}", e);
                }
                Self::default()
            }
        }
    }
}
