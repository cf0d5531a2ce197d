use vitrine_engine::{ViewQuery, discount_percent};
use vitrine_types::{ALL_CATEGORY, Product, ThemeMode};

use crate::presentation::view_models::{
    CategoryListViewModel, CommandResultViewModel, FilterSummary, Guidance, ProductEntry,
    ProductListViewModel, StatusBadge, ThemeViewModel,
};

fn product_entry(product: &Product) -> ProductEntry {
    ProductEntry {
        title: product.title.clone(),
        store: product.store.clone(),
        category: product.category.clone(),
        price: product.price,
        old_price: product.visible_old_price(),
        discount_percent: discount_percent(product.price, product.old_price),
        code: product.code.as_ref().map(|c| c.to_string()),
        link: product.link.clone(),
        image: product.image.clone(),
    }
}

pub fn present_product_list(
    view: &[&Product],
    total_count: usize,
    query: &ViewQuery,
    limit: Option<usize>,
) -> CommandResultViewModel<ProductListViewModel> {
    let products: Vec<ProductEntry> = view
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|p| product_entry(p))
        .collect();

    let search = query.search.trim();
    let content = ProductListViewModel {
        shown_count: products.len(),
        products,
        total_count,
        applied_filters: FilterSummary {
            category: query.category.clone(),
            search: (!search.is_empty()).then(|| search.to_string()),
            sort: query.sort,
            limit,
        },
    };

    let mut result = CommandResultViewModel::new(content);

    if result.content.products.is_empty() {
        result = result.with_badge(StatusBadge::info("Nenhum produto encontrado"));
        if !query.is_unfiltered() {
            result = result.with_suggestion(
                Guidance::new("Remova os filtros para ver o catálogo inteiro")
                    .with_command("vitrine list"),
            );
        }
    } else {
        let label = if view.len() > result.content.shown_count {
            format!(
                "{} de {} resultados (limite {})",
                result.content.shown_count,
                view.len(),
                result.content.shown_count
            )
        } else {
            format!("{} produto(s)", result.content.shown_count)
        };
        result = result.with_badge(StatusBadge::success(label));
    }

    result
}

pub fn present_categories(categories: &[String]) -> CommandResultViewModel<CategoryListViewModel> {
    let mut result = CommandResultViewModel::new(CategoryListViewModel {
        categories: categories.to_vec(),
    });

    if categories.len() > 1 {
        result = result.with_suggestion(
            Guidance::new("Filtre por categoria").with_command(format!(
                "vitrine list --category \"{}\"",
                categories
                    .iter()
                    .find(|c| c.as_str() != ALL_CATEGORY)
                    .map(String::as_str)
                    .unwrap_or(ALL_CATEGORY)
            )),
        );
    }

    result
}

pub fn present_theme(
    theme: ThemeMode,
    changed: bool,
    store_path: String,
) -> CommandResultViewModel<ThemeViewModel> {
    let result = CommandResultViewModel::new(ThemeViewModel {
        theme,
        changed,
        store_path,
    });

    if changed {
        result.with_badge(StatusBadge::success(format!("Tema salvo: {}", theme)))
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_types::SortMode;

    fn product(title: &str, price: f64) -> Product {
        Product {
            title: title.to_string(),
            price,
            old_price: Some(price * 2.0),
            category: "Casa".to_string(),
            store: "Shopee".to_string(),
            code: None,
            link: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_limit_truncates_entries() {
        let a = product("A", 10.0);
        let b = product("B", 20.0);
        let result = present_product_list(&[&a, &b], 2, &ViewQuery::default(), Some(1));

        assert_eq!(result.content.shown_count, 1);
        assert_eq!(result.content.total_count, 2);
        assert_eq!(result.content.products[0].discount_percent, 50);
        assert_eq!(
            result.badge.map(|b| b.label).as_deref(),
            Some("1 de 2 resultados (limite 1)")
        );
    }

    #[test]
    fn test_empty_filtered_list_suggests_reset() {
        let query = ViewQuery::default()
            .with_search("  xyz ")
            .with_sort(SortMode::PriceAsc);
        let result = present_product_list(&[], 3, &query, None);

        assert_eq!(result.content.applied_filters.search.as_deref(), Some("xyz"));
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.content.to_string(), "Nenhum produto encontrado\n");
    }

    #[test]
    fn test_category_suggestion_skips_all_label() {
        let categories = vec!["Todos".to_string(), "Casa".to_string()];
        let result = present_categories(&categories);
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("vitrine list --category \"Casa\"")
        );
    }
}
