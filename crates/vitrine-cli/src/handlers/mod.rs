pub mod browse;
pub mod categories;
pub mod list;
pub mod theme;

use anyhow::{Result, anyhow};
use vitrine_runtime::{Catalog, LoadError, load_catalog_blocking};

use crate::context::ExecutionContext;

/// Blocking load for the non-interactive commands.
fn load_for_command(ctx: &ExecutionContext) -> Result<Catalog> {
    load_catalog_blocking(&ctx.catalog_source())
        .map_err(|err| anyhow!("{} ({})", LoadError::USER_MESSAGE, err))
}
