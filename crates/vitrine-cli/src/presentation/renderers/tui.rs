use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use vitrine_runtime::{
    Catalog, Clipboard, KeyValueStore, LinkOpener, LoadError, persist_theme,
};

use crate::app::{AppState, Effect, map_key};
use crate::presentation::presenters::present_screen;
use crate::presentation::views::tui::draw;

const TICK: Duration = Duration::from_millis(100);

/// Messages from background work to the UI loop.
#[derive(Debug)]
pub enum TuiEvent {
    Loaded(Result<Catalog, LoadError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Owns the terminal for the interactive session and carries out the
/// effects the controller asks for.
pub struct TuiRenderer<C, O, S> {
    clipboard: C,
    opener: O,
    store: S,
    grid_columns: u16,
}

impl<C, O, S> TuiRenderer<C, O, S>
where
    C: Clipboard,
    O: LinkOpener,
    S: KeyValueStore,
{
    pub fn new(clipboard: C, opener: O, store: S, grid_columns: u16) -> Self {
        Self {
            clipboard,
            opener,
            store,
            grid_columns,
        }
    }

    /// Run until the user quits. The terminal is restored on every exit path.
    pub fn run(mut self, mut state: AppState, rx: Receiver<TuiEvent>) -> Result<()> {
        enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let result = Terminal::new(CrosstermBackend::new(io::stdout()))
            .map_err(anyhow::Error::from)
            .and_then(|mut terminal| self.event_loop(&mut terminal, &mut state, &rx));

        let restored = restore_terminal();
        result.and(restored)
    }

    fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        state: &mut AppState,
        rx: &Receiver<TuiEvent>,
    ) -> Result<()> {
        loop {
            while let Ok(event) = rx.try_recv() {
                match event {
                    TuiEvent::Loaded(result) => state.finish_load(result),
                }
            }
            state.expire_feedback(Instant::now());

            let model = present_screen(state, self.grid_columns);
            terminal.draw(|frame| draw(frame, &model))?;

            if !event::poll(TICK)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            let Some(action) = map_key(key, state.input_mode()) else {
                continue;
            };
            if let Some(effect) = state.apply(action)
                && self.execute(effect, state) == Flow::Quit
            {
                info!("Leaving browser");
                return Ok(());
            }
        }
    }

    fn execute(&mut self, effect: Effect, state: &mut AppState) -> Flow {
        match effect {
            Effect::Quit => return Flow::Quit,
            Effect::CopyCode { product, code } => match self.clipboard.copy(&code) {
                Ok(()) => state.confirm_copy(product, Instant::now()),
                Err(err) => warn!(error = %err, "Clipboard copy failed"),
            },
            Effect::OpenLink(url) => {
                if let Err(err) = self.opener.open(&url) {
                    warn!(url = %url, error = %err, "Failed to open link");
                    state.set_notice("Não foi possível abrir o link");
                }
            }
            Effect::PersistTheme(theme) => {
                if let Err(err) = persist_theme(&mut self.store, theme) {
                    warn!(error = %err, "Failed to persist theme");
                }
            }
        }
        Flow::Continue
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}
