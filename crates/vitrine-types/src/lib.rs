pub mod error;
pub mod product;
pub mod view;

pub use error::{Error, Result};
pub use product::{Product, ProductCode};
pub use view::{ALL_CATEGORY, LayoutMode, SortMode, ThemeMode};
