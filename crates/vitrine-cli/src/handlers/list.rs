use anyhow::Result;
use vitrine_engine::{ViewQuery, apply_view};
use vitrine_types::SortMode;

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_product_list;
use crate::presentation::renderers::{ConsoleRenderer, Renderer};

pub fn handle(
    ctx: &ExecutionContext,
    category: Option<String>,
    search: Option<String>,
    sort: SortMode,
    limit: Option<usize>,
) -> Result<()> {
    let catalog = super::load_for_command(ctx)?;

    let mut query = ViewQuery::new().with_sort(sort);
    if let Some(category) = category {
        query = query.with_category(category);
    }
    if let Some(search) = search {
        query = query.with_search(search);
    }

    let view = apply_view(catalog.products(), &query);
    let result = present_product_list(&view, catalog.len(), &query, limit);

    ConsoleRenderer::new(ctx.format()).render(result)
}
