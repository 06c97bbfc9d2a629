//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Keymap: Which key means which action
//! - Reducer: Pure function (State, Action) -> State

pub mod actions;
pub mod event;
pub mod keymap;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use keymap::map_key;
pub use reducer::reduce;
pub use state::{AppState, StatusBarState, UiConfig};
