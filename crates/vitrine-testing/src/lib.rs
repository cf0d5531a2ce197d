//! Testing infrastructure for vitrine integration tests.
//!
//! - `TestWorld`: isolated data directory plus a catalog file, and a way to
//!   run the binary against them
//! - `fixtures`: sample product feeds
//! - `assertions`: checks over the JSON output of `list` and `categories`

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
