use vitrine_runtime::{LoadError, LoadState};

use crate::app::{AppState, InputMode};
use crate::presentation::view_models::{
    BodyViewModel, HeaderViewModel, ScreenViewModel, StatusBarViewModel, StatusLevel,
};

use super::catalog::{present_cards, present_category_bar};

const BROWSE_HINTS: &[(&str, &str)] = &[
    ("/", "buscar"),
    ("s", "ordenar"),
    ("←→", "categoria"),
    ("g", "layout"),
    ("t", "tema"),
    ("c", "copiar"),
    ("o", "abrir"),
    ("q", "sair"),
];

const SEARCH_HINTS: &[(&str, &str)] = &[
    ("Enter", "confirmar"),
    ("^U", "limpar"),
    ("Esc", "sair da busca"),
];

/// Build the whole screen from the controller state.
pub fn present_screen(state: &AppState, grid_columns: u16) -> ScreenViewModel {
    let query = state.query();

    let header = HeaderViewModel {
        search: query.search.clone(),
        search_active: state.input_mode() == InputMode::Search,
        sort_label: query.sort.label().to_string(),
        layout: state.layout(),
        theme: state.theme(),
    };

    let categories = present_category_bar(state.catalog().categories(), &query.category);

    let body = match state.load_state() {
        LoadState::Loading => BodyViewModel::Loading,
        LoadState::Failed(_) => BodyViewModel::Error {
            message: LoadError::USER_MESSAGE.to_string(),
        },
        LoadState::Ready => {
            let copied = state
                .copied_product()
                .and_then(|product| state.view_indices().iter().position(|i| *i == product));
            BodyViewModel::Catalog(present_cards(
                state.view(),
                state.layout(),
                grid_columns,
                state.catalog().len(),
                state.selected(),
                copied,
            ))
        }
    };

    let (message, level) = match (state.notice(), state.load_state()) {
        (Some(notice), _) => (Some(notice.to_string()), StatusLevel::Warning),
        (None, LoadState::Failed(_)) => {
            (Some(LoadError::USER_MESSAGE.to_string()), StatusLevel::Error)
        }
        (None, LoadState::Loading) => (Some("Carregando…".to_string()), StatusLevel::Info),
        (None, LoadState::Ready) => (None, StatusLevel::Success),
    };

    let hints = match state.input_mode() {
        InputMode::Browse => BROWSE_HINTS.to_vec(),
        InputMode::Search => SEARCH_HINTS.to_vec(),
    };

    ScreenViewModel {
        theme: state.theme(),
        header,
        categories,
        body,
        status: StatusBarViewModel {
            shown: state.view().len(),
            total: state.catalog().len(),
            message,
            level,
            hints,
        },
    }
}
