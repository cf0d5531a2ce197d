use vitrine_engine::derive_categories;
use vitrine_types::Product;

/// The full product set for one session plus its derived categories.
///
/// Built once from the feed and never modified afterwards; views borrow
/// from it through [`Catalog::products`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
}

impl Catalog {
    /// Build from records in feed order.
    ///
    /// The feed appends new entries at the end; the catalog stores them
    /// newest first, which is the baseline every sort starts from.
    pub fn from_feed(mut records: Vec<Product>) -> Self {
        records.reverse();
        let categories = derive_categories(&records);
        Self {
            products: records,
            categories,
        }
    }

    /// A catalog with no products (before load, or after a failed one).
    pub fn empty() -> Self {
        Self::from_feed(Vec::new())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Category labels, "Todos" first.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_types::ALL_CATEGORY;

    fn product(title: &str, category: &str) -> Product {
        Product {
            title: title.to_string(),
            price: 1.0,
            old_price: None,
            category: category.to_string(),
            store: "S".to_string(),
            code: None,
            link: "l".to_string(),
            image: "i".to_string(),
        }
    }

    #[test]
    fn test_feed_order_is_reversed() {
        let catalog = Catalog::from_feed(vec![
            product("oldest", "A"),
            product("middle", "B"),
            product("newest", "A"),
        ]);
        let titles: Vec<&str> = catalog.products().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["newest", "middle", "oldest"]);
    }

    #[test]
    fn test_categories_follow_newest_first_order() {
        let catalog = Catalog::from_feed(vec![product("a", "Casa"), product("b", "Games")]);
        assert_eq!(catalog.categories(), &[ALL_CATEGORY, "Games", "Casa"]);
    }

    #[test]
    fn test_empty_catalog_still_has_all_category() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert_eq!(catalog.categories(), &[ALL_CATEGORY]);
    }
}
