//! Interactive browser
//!
//! The handler wires the pieces together: it restores preferences, starts
//! the one-shot catalog load on a background thread and hands the terminal
//! to the renderer. Load results reach the UI loop over a channel.

use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use tracing::info;
use vitrine_runtime::{Osc52Clipboard, SystemOpener, load_catalog_blocking, restore_theme};

use crate::app::AppState;
use crate::context::ExecutionContext;
use crate::presentation::renderers::{TuiEvent, TuiRenderer};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let config = ctx.config();
    let store = ctx.preference_store();
    let state = AppState::new(
        restore_theme(&store),
        config.ui.layout,
        config.copy_feedback(),
    );

    let source = ctx.catalog_source();
    info!(source = %source, data_dir = %ctx.data_dir().display(), "Starting browser");

    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("catalog-loader".to_string())
        .spawn(move || {
            let result = load_catalog_blocking(&source);
            // The UI may already be gone; nothing to report then.
            let _ = tx.send(TuiEvent::Loaded(result));
        })
        .context("Failed to start catalog loader")?;

    let renderer = TuiRenderer::new(
        Osc52Clipboard::stdout(),
        SystemOpener,
        store,
        config.grid_columns(),
    );
    renderer.run(state, rx)
}
