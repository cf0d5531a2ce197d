//! View models for the interactive screen
//!
//! Everything here is plain data computed by the presenters from
//! `AppState`; the ratatui views only lay it out.

use vitrine_types::{LayoutMode, ThemeMode};

use super::common::StatusLevel;

#[derive(Debug, Clone)]
pub struct ScreenViewModel {
    pub theme: ThemeMode,
    pub header: HeaderViewModel,
    pub categories: CategoryBarViewModel,
    pub body: BodyViewModel,
    pub status: StatusBarViewModel,
}

#[derive(Debug, Clone)]
pub struct HeaderViewModel {
    pub search: String,
    pub search_active: bool,
    pub sort_label: String,
    pub layout: LayoutMode,
    pub theme: ThemeMode,
}

#[derive(Debug, Clone)]
pub struct CategoryBarViewModel {
    pub entries: Vec<CategoryEntry>,
    pub active_index: usize,
}

#[derive(Debug, Clone)]
pub struct CategoryEntry {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub enum BodyViewModel {
    Loading,
    Error { message: String },
    Catalog(CatalogViewModel),
}

#[derive(Debug, Clone)]
pub struct CatalogViewModel {
    pub layout: LayoutMode,
    pub columns: u16,
    pub cards: Vec<CardViewModel>,
    pub selected: Option<usize>,
    pub total: usize,
    pub shown: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardViewModel {
    pub store: String,
    pub code_label: Option<String>,
    pub title: String,
    pub old_price: Option<String>,
    pub price: String,
    pub discount: Option<String>,
    pub link: String,
    pub copied: bool,
}

#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub shown: usize,
    pub total: usize,
    pub message: Option<String>,
    pub level: StatusLevel,
    pub hints: Vec<(&'static str, &'static str)>,
}
