//! Persisted key-value preferences
//!
//! A tiny string-to-string store kept as a JSON object in the data
//! directory. The only key the browser writes is [`THEME_KEY`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::warn;
use vitrine_types::ThemeMode;

use crate::{Error, Result};

/// Key under which the theme flag is persisted.
pub const THEME_KEY: &str = "theme";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// JSON-file backed store. Every `set` rewrites the whole file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. An unreadable or malformed file is
    /// also treated as empty (and logged); it is overwritten on the next `set`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
                warn!(path = %path.display(), error = %err, "Ignoring malformed preference store");
                BTreeMap::new()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Ignoring unreadable preference store");
                BTreeMap::new()
            }
        };

        Self { path, entries }
    }

    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join("storage.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| Error::Storage(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Theme saved by a previous session, light when absent.
pub fn restore_theme(store: &dyn KeyValueStore) -> ThemeMode {
    ThemeMode::from_stored(store.get(THEME_KEY).as_deref())
}

pub fn persist_theme(store: &mut dyn KeyValueStore, theme: ThemeMode) -> Result<()> {
    store.set(THEME_KEY, theme.as_str())
}
