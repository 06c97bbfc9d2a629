//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Actions that carry an
//! [`Intent`] are also forwarded to the flow controller by the event loop;
//! the controller answers with `OrderUpdated` and `Navigated` actions.

use crossterm::event::KeyEvent;
use libcupcake::{Intent, OrderSnapshot, Screen};

/// Actions that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick for redraws
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    /// Nothing to do
    Noop,

    // === Shell ===
    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// Move the highlight up one option
    CursorUp,

    /// Move the highlight down one option
    CursorDown,

    // === Wizard ===
    /// User intent for the flow controller
    Intent(Intent),

    /// The flow controller changed screens
    Navigated {
        screen: Screen,
        can_navigate_back: bool,
    },

    /// The order state holder published a new snapshot
    OrderUpdated(OrderSnapshot),

    // === Error Handling ===
    /// Show error overlay
    ShowError(String),

    /// Dismiss error overlay
    DismissError,

    // === Status Bar ===
    /// Update status message
    SetStatus(String),
}

impl From<Intent> for Action {
    fn from(intent: Intent) -> Self {
        Action::Intent(intent)
    }
}
