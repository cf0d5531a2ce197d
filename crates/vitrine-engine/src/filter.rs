use vitrine_types::{ALL_CATEGORY, Product};

/// Whether `product` survives the category filter.
///
/// The pseudo-category [`ALL_CATEGORY`] admits everything. Otherwise the
/// comparison is exact and case-sensitive, unlike the text search.
pub fn in_category(product: &Product, category: &str) -> bool {
    category == ALL_CATEGORY || product.category == category
}

/// Trim and lowercase a raw search term. An empty result disables the text filter.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// `term` must already be normalized.
pub fn matches_term(product: &Product, term: &str) -> bool {
    if product.title.to_lowercase().contains(term) {
        return true;
    }

    product
        .code
        .as_ref()
        .is_some_and(|code| code.to_string().to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_types::ProductCode;

    fn product(title: &str, category: &str, code: Option<ProductCode>) -> Product {
        Product {
            title: title.to_string(),
            price: 10.0,
            old_price: None,
            category: category.to_string(),
            store: "Shopee".to_string(),
            code,
            link: "l".to_string(),
            image: "i".to_string(),
        }
    }

    #[test]
    fn test_all_category_admits_everything() {
        assert!(in_category(&product("A", "X", None), ALL_CATEGORY));
        assert!(in_category(&product("A", "", None), ALL_CATEGORY));
    }

    #[test]
    fn test_category_is_case_sensitive() {
        assert!(in_category(&product("A", "Casa", None), "Casa"));
        assert!(!in_category(&product("B", "casa", None), "Casa"));
    }

    #[test]
    fn test_term_normalization() {
        assert_eq!(normalize_term("  Fone BT \t"), "fone bt");
        assert_eq!(normalize_term("   "), "");
    }

    #[test]
    fn test_title_match_ignores_case() {
        let apple = product("Apple", "X", None);
        assert!(matches_term(&apple, "app"));
        assert!(matches_term(&apple, "a"));
        assert!(!matches_term(&apple, "xyz"));
    }

    #[test]
    fn test_code_match() {
        let text = product("Fone", "X", Some(ProductCode::from("AbC-77")));
        let number = product("Mouse", "X", Some(ProductCode::from(4012u64)));
        let none = product("Cabo", "X", None);

        assert!(matches_term(&text, "abc"));
        assert!(matches_term(&number, "401"));
        assert!(!matches_term(&none, "401"));
    }
}
