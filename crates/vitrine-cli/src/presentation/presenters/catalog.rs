use vitrine_engine::discount_percent;
use vitrine_types::{LayoutMode, Product};

use crate::presentation::formatters::{format_brl, format_discount};
use crate::presentation::view_models::{
    CardViewModel, CatalogViewModel, CategoryBarViewModel, CategoryEntry,
};

pub fn present_card(product: &Product, copied: bool) -> CardViewModel {
    CardViewModel {
        store: product.store.to_uppercase(),
        code_label: product.code.as_ref().map(|code| format!("ID: {}", code)),
        title: product.title.clone(),
        old_price: product.visible_old_price().map(format_brl),
        price: format_brl(product.price),
        discount: format_discount(discount_percent(product.price, product.old_price)),
        link: product.link.clone(),
        copied,
    }
}

/// Cards for a view list. `copied` is the view position showing the copy
/// confirmation, if any.
pub fn present_cards<'a>(
    view: impl IntoIterator<Item = &'a Product>,
    layout: LayoutMode,
    columns: u16,
    total: usize,
    selected: Option<usize>,
    copied: Option<usize>,
) -> CatalogViewModel {
    let cards: Vec<CardViewModel> = view
        .into_iter()
        .enumerate()
        .map(|(position, product)| present_card(product, copied == Some(position)))
        .collect();

    CatalogViewModel {
        layout,
        columns: columns.max(1),
        shown: cards.len(),
        cards,
        selected,
        total,
    }
}

pub fn present_category_bar(categories: &[String], active: &str) -> CategoryBarViewModel {
    let entries: Vec<CategoryEntry> = categories
        .iter()
        .map(|label| CategoryEntry {
            label: label.clone(),
            active: label == active,
        })
        .collect();
    let active_index = entries.iter().position(|e| e.active).unwrap_or(0);

    CategoryBarViewModel {
        entries,
        active_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_types::ProductCode;

    fn air_fryer() -> Product {
        Product {
            title: "Air Fryer".to_string(),
            price: 299.0,
            old_price: Some(449.0),
            category: "Casa".to_string(),
            store: "Mercado Livre".to_string(),
            code: Some(ProductCode::from(771)),
            link: "https://m/2".to_string(),
            image: "https://i/2".to_string(),
        }
    }

    #[test]
    fn test_card_with_discount_and_code() {
        let card = present_card(&air_fryer(), false);
        assert_eq!(card.store, "MERCADO LIVRE");
        assert_eq!(card.code_label.as_deref(), Some("ID: 771"));
        assert_eq!(card.old_price.as_deref(), Some("R$ 449,00"));
        assert_eq!(card.price, "R$ 299,00");
        assert_eq!(card.discount.as_deref(), Some("-33%"));
        assert_eq!(card.link, "https://m/2");
        assert!(!card.copied);
    }

    #[test]
    fn test_card_without_optional_fields() {
        let mut product = air_fryer();
        product.old_price = Some(0.0);
        product.code = None;

        let card = present_card(&product, false);
        assert_eq!(card.old_price, None);
        assert_eq!(card.discount, None);
        assert_eq!(card.code_label, None);
    }

    #[test]
    fn test_old_price_below_price_is_shown_without_badge() {
        let mut product = air_fryer();
        product.old_price = Some(199.0);

        let card = present_card(&product, false);
        assert_eq!(card.old_price.as_deref(), Some("R$ 199,00"));
        assert_eq!(card.discount, None);
    }

    #[test]
    fn test_empty_view_yields_no_cards() {
        let model = present_cards(Vec::<&Product>::new(), LayoutMode::Grid, 2, 5, None, None);
        assert!(model.cards.is_empty());
        assert_eq!(model.shown, 0);
        assert_eq!(model.total, 5);
    }

    #[test]
    fn test_copied_flag_lands_on_one_card() {
        let a = air_fryer();
        let b = air_fryer();
        let model = present_cards([&a, &b], LayoutMode::List, 0, 2, Some(1), Some(1));
        assert_eq!(model.columns, 1);
        assert!(!model.cards[0].copied);
        assert!(model.cards[1].copied);
    }

    #[test]
    fn test_category_bar_highlights_active() {
        let categories = vec!["Todos".to_string(), "Casa".to_string()];
        let bar = present_category_bar(&categories, "Casa");
        assert_eq!(bar.active_index, 1);
        assert!(bar.entries[1].active);
        assert!(!bar.entries[0].active);
    }
}
