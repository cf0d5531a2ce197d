use anyhow::{Context, Result};
use vitrine_runtime::{persist_theme, restore_theme};
use vitrine_types::ThemeMode;

use crate::args::ThemeCommand;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_theme;
use crate::presentation::renderers::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &ExecutionContext, command: Option<ThemeCommand>) -> Result<()> {
    let mut store = ctx.preference_store();
    let current = restore_theme(&store);

    let target: Option<ThemeMode> = match command.unwrap_or(ThemeCommand::Show) {
        ThemeCommand::Show => None,
        ThemeCommand::Toggle => Some(current.toggled()),
        ThemeCommand::Set { theme } => Some(theme.into()),
    };

    let theme = match target {
        Some(theme) => {
            persist_theme(&mut store, theme).with_context(|| {
                format!("Failed to save theme to {}", store.path().display())
            })?;
            theme
        }
        None => current,
    };

    let result = present_theme(
        theme,
        target.is_some(),
        store.path().display().to_string(),
    );
    ConsoleRenderer::new(ctx.format()).render(result)
}
