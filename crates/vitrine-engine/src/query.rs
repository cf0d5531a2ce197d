use serde::Serialize;
use vitrine_types::{ALL_CATEGORY, SortMode};

/// The slice of view state the engine needs to produce a view list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewQuery {
    pub category: String,
    pub search: String,
    pub sort: SortMode,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORY.to_string(),
            search: String::new(),
            sort: SortMode::Default,
        }
    }
}

impl ViewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        self.category == ALL_CATEGORY && self.search.trim().is_empty()
    }
}
