// NOTE: vitrine layering
//
// types   - product record and view-state enums, no behaviour
// engine  - pure filter/sort/category functions over borrowed products
// runtime - the one-shot catalog load plus host integrations
//           (config, preference store, clipboard, link opener)
// cli     - this crate: view controller, presentation and the terminal loop
//
// The controller never touches the terminal and the views never touch
// state; presenters sit in between and are plain functions, which is what
// keeps the screen testable without a TTY.

pub mod app;
mod args;
mod commands;
pub mod context;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat, SortArg, ThemeArg, ThemeCommand};
pub use commands::run;
