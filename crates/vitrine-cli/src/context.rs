use anyhow::Result;
use std::path::{Path, PathBuf};
use vitrine_runtime::{CatalogSource, Config, FileStore, resolve_data_dir};

use crate::presentation::OutputFormat;

/// Everything a handler needs that comes from the command line or disk.
pub struct ExecutionContext {
    data_dir: PathBuf,
    config: Config,
    catalog_override: Option<String>,
    format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(
        data_dir: Option<&str>,
        catalog_override: Option<String>,
        format: OutputFormat,
    ) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir)?;
        let config = Config::load_from(&Config::default_path(&data_dir))?;

        Ok(Self {
            data_dir,
            config,
            catalog_override,
            format,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn catalog_source(&self) -> CatalogSource {
        self.config.catalog_source(self.catalog_override.as_deref())
    }

    pub fn preference_store(&self) -> FileStore {
        FileStore::open(FileStore::default_path(&self.data_dir))
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("vitrine.log")
    }
}
