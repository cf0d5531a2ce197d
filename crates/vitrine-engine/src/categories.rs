use std::collections::HashSet;

use vitrine_types::{ALL_CATEGORY, Product};

/// Distinct categories in order of first appearance, led by [`ALL_CATEGORY`].
pub fn derive_categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = vec![ALL_CATEGORY.to_string()];

    for product in products {
        if seen.insert(product.category.as_str()) {
            categories.push(product.category.clone());
        }
    }

    categories
}
