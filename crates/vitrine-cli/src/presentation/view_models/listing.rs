use serde::Serialize;
use std::fmt;
use vitrine_types::{SortMode, ThemeMode};

use crate::presentation::formatters::{format_brl, format_discount};

#[derive(Debug, Serialize)]
pub struct ProductListViewModel {
    pub products: Vec<ProductEntry>,
    pub total_count: usize,
    pub shown_count: usize,
    pub applied_filters: FilterSummary,
}

#[derive(Debug, Serialize)]
pub struct ProductEntry {
    pub title: String,
    pub store: String,
    pub category: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_price: Option<f64>,
    pub discount_percent: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub link: String,
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct FilterSummary {
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub sort: SortMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl fmt::Display for ProductListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.products.is_empty() {
            return writeln!(f, "Nenhum produto encontrado");
        }

        for entry in &self.products {
            write!(f, "{:>12}", format_brl(entry.price))?;
            match format_discount(entry.discount_percent) {
                Some(badge) => write!(f, "  {:<5}", badge)?,
                None => write!(f, "  {:<5}", "")?,
            }
            writeln!(f, "  [{}] {}", entry.store.to_uppercase(), entry.title)?;
            if let Some(code) = &entry.code {
                writeln!(f, "{:>21}ID: {}", "", code)?;
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "{} de {} produtos · {}",
            self.shown_count, self.total_count, self.applied_filters
        )
    }
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "categoria: {}", self.category)?;
        if let Some(search) = &self.search {
            write!(f, " · busca: \"{}\"", search)?;
        }
        write!(f, " · ordem: {}", self.sort.label())
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryListViewModel {
    pub categories: Vec<String>,
}

impl fmt::Display for CategoryListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for category in &self.categories {
            writeln!(f, "{}", category)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ThemeViewModel {
    pub theme: ThemeMode,
    pub changed: bool,
    pub store_path: String,
}

impl fmt::Display for ThemeViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.theme)
    }
}
