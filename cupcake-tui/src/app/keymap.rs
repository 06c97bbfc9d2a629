//! Keybindings
//!
//! Maps a key press to an action given the current state. This is the
//! only place that knows which keys exist.
//!
//! | Key                   | Where                 | Action           |
//! |-----------------------|-----------------------|------------------|
//! | `q`, `Ctrl+C`         | everywhere            | quit             |
//! | `F1`                  | everywhere            | toggle help      |
//! | `Esc`                 | overlay open          | close overlay    |
//! | `Esc`, `Backspace`, `←` | not on Start        | navigate up      |
//! | `↑`/`k`, `↓`/`j`      | option screens        | move highlight   |
//! | `Enter`, `Space`      | option screens        | select           |
//! | `n`, `→`              | Flavor, Pickup        | next             |
//! | `c`                   | Flavor, Pickup, Summary | cancel order   |
//! | `s`                   | Summary               | send order       |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use libcupcake::{Intent, Screen};

use super::actions::Action;
use super::state::AppState;

/// Resolve a key press to an action
pub fn map_key(state: &AppState, key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::Noop;
    }

    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Action::Quit,
        (KeyCode::F(1), _) => {
            return if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
        }
        (KeyCode::Esc, _) if state.error.is_some() => return Action::DismissError,
        (KeyCode::Esc, _) if state.help_visible => return Action::HideHelp,
        _ => {}
    }

    // Overlays swallow everything else
    if state.error.is_some() || state.help_visible {
        return Action::Noop;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => {
            return if state.can_navigate_back {
                Intent::NavigateUp.into()
            } else {
                Action::Noop
            };
        }
        KeyCode::Up | KeyCode::Char('k') => return Action::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => return Action::CursorDown,
        _ => {}
    }

    // Screen-specific keybindings
    match state.current_screen {
        Screen::Start => map_start_key(state, key),
        Screen::Flavor | Screen::Pickup => map_option_key(state, key),
        Screen::Summary => map_summary_key(key),
    }
}

fn map_start_key(state: &AppState, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => match state.quantities.get(state.cursor) {
            Some(quantity) => Intent::SelectQuantity(*quantity).into(),
            None => Action::Noop,
        },
        _ => Action::Noop,
    }
}

fn map_option_key(state: &AppState, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            let labels = state.option_labels(state.current_screen);
            let Some(label) = labels.get(state.cursor).cloned() else {
                return Action::Noop;
            };
            if state.current_screen == Screen::Flavor {
                Intent::SelectFlavor(label).into()
            } else {
                Intent::SelectDate(label).into()
            }
        }
        KeyCode::Char('n') | KeyCode::Right => Intent::Next.into(),
        KeyCode::Char('c') => Intent::Cancel.into(),
        _ => Action::Noop,
    }
}

fn map_summary_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('s') => Intent::Send.into(),
        KeyCode::Char('c') => Intent::Cancel.into(),
        _ => Action::Noop,
    }
}
