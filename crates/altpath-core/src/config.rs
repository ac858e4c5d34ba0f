//! Configuration for altpath (stored in ~/.config/altpath/config.toml)
//!
//! ```toml
//! format = "json"
//! source = 0
//!
//! [labels]
//! a = "red"
//! b = "blue"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AltPathError, Result};
use crate::format::OutputFormat;
use crate::graph::Color;

const CONFIG_DIR: &str = "altpath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ALTPATH_CONFIG_DIR";

/// Display names for the two edge colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorLabels {
    pub a: String,
    pub b: String,
}

impl Default for ColorLabels {
    fn default() -> Self {
        Self {
            a: Color::A.to_string(),
            b: Color::B.to_string(),
        }
    }
}

impl ColorLabels {
    pub fn label(&self, color: Color) -> &str {
        match color {
            Color::A => &self.a,
            Color::B => &self.b,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format used when `--format` is not given
    pub format: Option<OutputFormat>,
    /// Source vertex used when neither the document nor `--source` names one
    pub source: Option<usize>,
    pub labels: ColorLabels,
}

impl Config {
    /// Default config location, honoring `ALTPATH_CONFIG_DIR`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    AltPathError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from an explicit path (must exist) or the default path (may be absent)
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AltPathError::io_operation("read config", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
