pub mod catalog;
pub mod listing;
pub mod screen;

pub use catalog::{present_card, present_cards, present_category_bar};
pub use listing::{present_categories, present_product_list, present_theme};
pub use screen::present_screen;
