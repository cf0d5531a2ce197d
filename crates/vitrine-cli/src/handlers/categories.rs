use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_categories;
use crate::presentation::renderers::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let catalog = super::load_for_command(ctx)?;
    let result = present_categories(catalog.categories());
    ConsoleRenderer::new(ctx.format()).render(result)
}
