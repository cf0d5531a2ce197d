pub mod price;
pub mod text;

pub use price::{format_brl, format_discount};
pub use text::truncate;
