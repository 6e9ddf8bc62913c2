use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::Jurisdiction;

/// Root application configuration, loaded from
/// `~/.config/pagecite/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub statute: Jurisdiction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Style applied when a request names none. Unrecognized values degrade
    /// to the plain template, same as any other style lookup.
    pub default_style: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_style: "mla".to_string(),
        }
    }
}

// ─── Load / Save ───────────────────────────────────────────

impl AppConfig {
    /// Standard config file path: `~/.config/pagecite/config.toml`
    pub fn config_path() -> PathBuf {
        // Allow override via env var
        if let Ok(path) = std::env::var("PAGECITE_CONFIG") {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("pagecite")
            .join("config.toml")
    }

    /// Load from the standard path; a missing file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
