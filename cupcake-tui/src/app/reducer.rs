//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State` with no side effects. Intents are passed
//! through untouched here; the event loop forwards them to the flow
//! controller and feeds the results back in as further actions.

use super::actions::Action;
use super::keymap::map_key;
use super::state::{AppState, StatusBarState};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
///
/// `Action::Key` is resolved through [`map_key`] for shell keys (quit,
/// help, cursor movement). A key that maps to an `Action::Intent` only
/// clears the status line here; the event loop must call `map_key` itself
/// and dispatch intents to the flow controller before reducing.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => {
            let action = map_key(&state, key);
            reduce(state, action)
        }
        Action::Tick | Action::Resize(_, _) | Action::Noop => state,

        // === Shell ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::CursorUp => AppState {
            cursor: state.cursor.saturating_sub(1),
            ..state
        },

        Action::CursorDown => {
            let last = state.option_count().saturating_sub(1);
            AppState {
                cursor: (state.cursor + 1).min(last),
                ..state
            }
        }

        // === Wizard ===
        // Handled by the flow controller; a new intent clears stale status
        Action::Intent(_) => AppState {
            status: StatusBarState::default(),
            ..state
        },

        Action::Navigated {
            screen,
            can_navigate_back,
        } => {
            let state = AppState {
                current_screen: screen,
                can_navigate_back,
                ..state
            };
            let cursor = state.selected_index(screen).unwrap_or(0);
            AppState { cursor, ..state }
        }

        Action::OrderUpdated(order) => {
            let state = AppState { order, ..state };
            let last = state.option_count().saturating_sub(1);
            AppState {
                cursor: state.cursor.min(last),
                ..state
            }
        }

        // === Error Handling ===
        Action::ShowError(error) => AppState {
            error: Some(error),
            ..state
        },

        Action::DismissError => AppState {
            error: None,
            ..state
        },

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libcupcake::{Intent, Screen};

    #[test]
    fn test_reducer_is_pure() {
        let state = AppState::new();
        let state_clone = state.clone();

        let new_state = reduce(state_clone.clone(), Action::SetStatus("Test".to_string()));

        assert!(state_clone.status.message.is_none());
        assert_eq!(new_state.status.message, Some("Test".to_string()));
    }

    #[test]
    fn test_quit_action() {
        let state = AppState::new();
        assert!(!state.should_quit);

        let new_state = reduce(state, Action::Quit);
        assert!(new_state.should_quit);
    }

    #[test]
    fn test_cursor_is_bounded() {
        let mut state = AppState::new();
        state = reduce(state, Action::CursorUp);
        assert_eq!(state.cursor, 0);

        for _ in 0..10 {
            state = reduce(state, Action::CursorDown);
        }
        assert_eq!(state.cursor, state.quantities.len() - 1);
    }

    #[test]
    fn test_navigated_restores_previous_choice() {
        let mut state = AppState::new();
        state.order.flavor = Some("Red Velvet".to_string());

        let state = reduce(
            state,
            Action::Navigated {
                screen: Screen::Flavor,
                can_navigate_back: true,
            },
        );

        assert_eq!(state.current_screen, Screen::Flavor);
        assert!(state.can_navigate_back);
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_intent_clears_status() {
        let state = reduce(AppState::new(), Action::SetStatus("Order sent".to_string()));
        let state = reduce(state, Action::Intent(Intent::Cancel));
        assert!(state.status.message.is_none());
    }

    #[test]
    fn test_key_mapped_to_intent_leaves_wizard_untouched() {
        let state = AppState::new();
        let enter = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Enter,
            crossterm::event::KeyModifiers::NONE,
        );
        assert!(matches!(map_key(&state, enter), Action::Intent(_)));

        let new_state = reduce(state, Action::Key(enter));

        assert_eq!(new_state.current_screen, Screen::Start);
        assert_eq!(new_state.order.quantity, 0);
    }

    #[test]
    fn test_order_update_clamps_cursor() {
        let mut state = AppState::new();
        state.current_screen = Screen::Pickup;
        state.order.pickup_options = vec!["a".into(), "b".into(), "c".into()];
        state.cursor = 2;

        let mut order = state.order.clone();
        order.pickup_options.truncate(1);
        let state = reduce(state, Action::OrderUpdated(order));

        assert_eq!(state.cursor, 0);
    }
}
