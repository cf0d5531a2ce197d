pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod loader;
pub mod opener;
pub mod storage;

pub use catalog::Catalog;
pub use clipboard::{Clipboard, MemoryClipboard, Osc52Clipboard};
pub use config::{Config, UiConfig, resolve_data_dir};
pub use error::{Error, LoadError, Result};
pub use loader::{CatalogSource, LoadState, load_catalog, load_catalog_blocking};
pub use opener::{LinkOpener, SystemOpener};
pub use storage::{FileStore, KeyValueStore, MemoryStore, THEME_KEY, persist_theme, restore_theme};
