pub mod common;
pub mod listing;
pub mod result;
pub mod screen;

pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel};
pub use listing::{
    CategoryListViewModel, FilterSummary, ProductEntry, ProductListViewModel, ThemeViewModel,
};
pub use result::CommandResultViewModel;
pub use screen::{
    BodyViewModel, CardViewModel, CatalogViewModel, CategoryBarViewModel, CategoryEntry,
    HeaderViewModel, ScreenViewModel, StatusBarViewModel,
};
