use crate::loader::CatalogSource;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use vitrine_types::LayoutMode;

/// Feed location used when neither config nor command line names one.
pub const DEFAULT_CATALOG: &str = "produtos.json";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. VITRINE_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.vitrine (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("VITRINE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("vitrine"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".vitrine"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub layout: LayoutMode,
    pub grid_columns: u16,
    pub copy_feedback_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            layout: LayoutMode::Grid,
            grid_columns: 2,
            copy_feedback_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_catalog")]
    pub catalog: String,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_catalog() -> String {
    DEFAULT_CATALOG.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Feed location, preferring a command-line override.
    pub fn catalog_source(&self, override_source: Option<&str>) -> CatalogSource {
        CatalogSource::parse(override_source.unwrap_or(&self.catalog))
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.ui.copy_feedback_ms)
    }

    /// Grid columns, never fewer than one.
    pub fn grid_columns(&self) -> u16 {
        self.ui.grid_columns.max(1)
    }
}
