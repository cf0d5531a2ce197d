pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod theme;
pub mod view_models;
pub mod views;

pub use view_models::OutputFormat;
