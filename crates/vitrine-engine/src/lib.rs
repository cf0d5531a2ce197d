// Engine module - pure catalog transformations
// This layer sits between the loaded product set (types) and CLI presentation.
// Nothing here mutates the full set; every step yields a new sequence.

pub mod categories;
pub mod filter;
pub mod pricing;
pub mod query;
pub mod sort;

pub use categories::derive_categories;
pub use pricing::discount_percent;
pub use query::ViewQuery;

use vitrine_types::Product;

// Façade API - stable public interface for the CLI layer

/// Compute the view list: category filter, then text filter, then sort.
pub fn apply_view<'a>(full_set: &'a [Product], query: &ViewQuery) -> Vec<&'a Product> {
    view_indices(full_set, query)
        .into_iter()
        .map(|i| &full_set[i])
        .collect()
}

/// Same as [`apply_view`], as positions into `full_set`.
///
/// Lets long-lived state hold on to a view without borrowing the catalog.
pub fn view_indices(full_set: &[Product], query: &ViewQuery) -> Vec<usize> {
    let term = filter::normalize_term(&query.search);

    let mut indices: Vec<usize> = full_set
        .iter()
        .enumerate()
        .filter(|(_, p)| filter::in_category(p, &query.category))
        .filter(|(_, p)| term.is_empty() || filter::matches_term(p, &term))
        .map(|(i, _)| i)
        .collect();

    sort::sort_by_mode(&mut indices, query.sort, |i| &full_set[*i]);
    indices
}
