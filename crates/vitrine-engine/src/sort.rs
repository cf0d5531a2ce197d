use vitrine_types::{Product, SortMode};

const SHOPEE: &str = "shopee";
const MERCADO_LIVRE_MARKERS: [&str; 2] = ["mercado", "ml"];

/// Reorder `products` in place according to `mode`.
///
/// Every ordering is stable: ties and partition members keep the order
/// they had on input, which for unsorted input is feed order (newest first).
pub fn sort_products(products: &mut [&Product], mode: SortMode) {
    sort_by_mode(products, mode, |p| *p);
}

/// [`sort_products`] for any item that can be resolved to a product.
pub fn sort_by_mode<'p, T, F>(items: &mut [T], mode: SortMode, product: F)
where
    F: Fn(&T) -> &'p Product,
{
    match mode {
        SortMode::Default => {}
        SortMode::PriceAsc => {
            items.sort_by(|a, b| product(a).price.total_cmp(&product(b).price))
        }
        SortMode::PriceDesc => {
            items.sort_by(|a, b| product(b).price.total_cmp(&product(a).price))
        }
        SortMode::StoreShopee => items.sort_by_key(|item| !is_shopee(&product(item).store)),
        SortMode::StoreMl => items.sort_by_key(|item| !is_mercado_livre(&product(item).store)),
    }
}

pub fn is_shopee(store: &str) -> bool {
    store.to_lowercase() == SHOPEE
}

pub fn is_mercado_livre(store: &str) -> bool {
    let store = store.to_lowercase();
    MERCADO_LIVRE_MARKERS
        .iter()
        .any(|marker| store.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, price: f64, store: &str) -> Product {
        Product {
            title: title.to_string(),
            price,
            old_price: None,
            category: "X".to_string(),
            store: store.to_string(),
            code: None,
            link: "l".to_string(),
            image: "i".to_string(),
        }
    }

    fn sorted(set: &[Product], mode: SortMode) -> Vec<&str> {
        let mut view: Vec<&Product> = set.iter().collect();
        sort_products(&mut view, mode);
        view.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_default_keeps_input_order() {
        let set = vec![product("A", 10.0, "Shopee"), product("B", 5.0, "ML")];
        assert_eq!(sorted(&set, SortMode::Default), vec!["A", "B"]);
    }

    #[test]
    fn test_price_orders() {
        let set = vec![
            product("A", 10.0, "Shopee"),
            product("B", 5.0, "ML"),
            product("C", 7.5, "Amazon"),
        ];
        assert_eq!(sorted(&set, SortMode::PriceAsc), vec!["B", "C", "A"]);
        assert_eq!(sorted(&set, SortMode::PriceDesc), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_price_ties_keep_input_order() {
        let set = vec![
            product("A", 5.0, "x"),
            product("B", 1.0, "x"),
            product("C", 5.0, "x"),
        ];
        assert_eq!(sorted(&set, SortMode::PriceAsc), vec!["B", "A", "C"]);
        assert_eq!(sorted(&set, SortMode::PriceDesc), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_shopee_partition_first() {
        let set = vec![
            product("ML", 1.0, "ML"),
            product("Shopee", 1.0, "Shopee"),
            product("Other", 1.0, "Other"),
        ];
        assert_eq!(
            sorted(&set, SortMode::StoreShopee),
            vec!["Shopee", "ML", "Other"]
        );
    }

    #[test]
    fn test_shopee_match_is_exact_ignoring_case() {
        assert!(is_shopee("SHOPEE"));
        assert!(!is_shopee("Shopee Mall"));
    }

    #[test]
    fn test_mercado_livre_partition_first() {
        let set = vec![
            product("Amazon", 1.0, "Amazon"),
            product("Mercado", 1.0, "Mercado Livre"),
            product("Shopee", 1.0, "Shopee"),
            product("Ml", 1.0, "ML"),
        ];
        assert_eq!(
            sorted(&set, SortMode::StoreMl),
            vec!["Mercado", "Ml", "Amazon", "Shopee"]
        );
    }
}
