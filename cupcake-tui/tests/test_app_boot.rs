//! Test application initialization and boot sequence
//!
//! Verifies that the app initializes with correct defaults
//! based on environment variables.

use cupcake_tui::app::AppState;
use libcupcake::options::{FLAVORS, QUANTITY_OPTIONS};
use libcupcake::Screen;
use serial_test::serial;

#[test]
fn test_app_initializes_to_start_screen() {
    let state = AppState::new();

    assert_eq!(state.current_screen, Screen::Start);
    assert!(!state.can_navigate_back);
    assert!(!state.should_quit);
}

#[test]
fn test_overlays_hidden_on_boot() {
    let state = AppState::new();

    assert!(!state.help_visible);
    assert!(state.error.is_none());
    assert!(state.status.message.is_none());
}

#[test]
fn test_options_loaded_from_tables() {
    let state = AppState::new();

    assert_eq!(state.quantities, QUANTITY_OPTIONS.to_vec());
    assert_eq!(state.flavors.len(), FLAVORS.len());
    assert_eq!(state.option_labels(Screen::Start)[0], "6 cupcakes");
}

#[test]
fn test_order_starts_empty() {
    let state = AppState::new();

    assert_eq!(state.order.quantity, 0);
    assert!(state.order.flavor.is_none());
    assert!(!state.can_go_next());
}

#[test]
#[serial]
fn test_colors_disabled_with_no_color_env() {
    std::env::set_var("NO_COLOR", "1");
    let state = AppState::new();
    std::env::remove_var("NO_COLOR");

    assert!(!state.config.colors_enabled);
}

#[test]
#[serial]
fn test_colors_disabled_with_cupcake_tui_no_color_env() {
    std::env::set_var("CUPCAKE_TUI_NO_COLOR", "1");
    let state = AppState::new();
    std::env::remove_var("CUPCAKE_TUI_NO_COLOR");

    assert!(!state.config.colors_enabled);
    assert!(!state.config.unicode_enabled);
}

#[test]
#[serial]
fn test_tick_rate_from_env() {
    std::env::set_var("CUPCAKE_TUI_TICK_MS", "250");
    let state = AppState::new();
    std::env::remove_var("CUPCAKE_TUI_TICK_MS");

    assert_eq!(state.config.tick_rate_ms, 250);
}

#[test]
#[serial]
fn test_tick_rate_default_100ms() {
    std::env::remove_var("CUPCAKE_TUI_TICK_MS");
    let state = AppState::new();

    assert_eq!(state.config.tick_rate_ms, 100);
}
