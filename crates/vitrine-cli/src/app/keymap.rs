use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{Action, InputMode};

/// Translate a key press into an action for the current input mode.
pub fn map_key(key: KeyEvent, mode: InputMode) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match mode {
        InputMode::Search => map_search_key(key.code, ctrl),
        InputMode::Browse => map_browse_key(key.code),
    }
}

fn map_search_key(code: KeyCode, ctrl: bool) -> Option<Action> {
    match code {
        KeyCode::Enter | KeyCode::Esc => Some(Action::EndSearch),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Char('u') if ctrl => Some(Action::SearchClear),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Action::SearchInput(c)),
        KeyCode::Down => Some(Action::SelectNext),
        KeyCode::Up => Some(Action::SelectPrevious),
        _ => None,
    }
}

fn map_browse_key(code: KeyCode) -> Option<Action> {
    let action = match code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('/') => Action::StartSearch,
        KeyCode::Char('s') => Action::NextSort,
        KeyCode::Char('S') => Action::PreviousSort,
        KeyCode::Right | KeyCode::Char('l') => Action::NextCategory,
        KeyCode::Left | KeyCode::Char('h') => Action::PreviousCategory,
        KeyCode::Char(c @ '1'..='9') => Action::SelectCategory(c as usize - '1' as usize),
        KeyCode::Char('g') => Action::ToggleLayout,
        KeyCode::Char('t') => Action::ToggleTheme,
        KeyCode::Char('c') => Action::CopyCode,
        KeyCode::Enter | KeyCode::Char('o') => Action::OpenLink,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Home => Action::SelectFirst,
        KeyCode::End => Action::SelectLast,
        _ => return None,
    };
    Some(action)
}
