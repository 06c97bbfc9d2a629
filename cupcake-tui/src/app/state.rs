//! Application state
//!
//! Plain data describing what the terminal shows. The order itself lives
//! in the flow controller; `AppState` only keeps the latest snapshot it
//! was sent.

use libcupcake::options::{quantity_label, FLAVORS, QUANTITY_OPTIONS};
use libcupcake::{OrderSnapshot, Screen};

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Screen on top of the back-stack
    pub current_screen: Screen,

    /// Whether the title bar offers "back"
    pub can_navigate_back: bool,

    /// Highlighted option on the current screen
    pub cursor: usize,

    /// Latest order snapshot
    pub order: OrderSnapshot,

    /// Quantities offered on Start
    pub quantities: Vec<u32>,

    /// Flavors offered on Flavor
    pub flavors: Vec<String>,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Status bar state
    pub status: StatusBarState,

    /// Error overlay state
    pub error: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            current_screen: Screen::Start,
            can_navigate_back: false,
            cursor: 0,
            order: OrderSnapshot::default(),
            quantities: QUANTITY_OPTIONS.to_vec(),
            flavors: FLAVORS.iter().map(|f| f.to_string()).collect(),
            help_visible: false,
            status: StatusBarState::default(),
            error: None,
            config: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("CUPCAKE_TUI_NO_COLOR").is_err();

        let unicode_enabled = colors_enabled; // Same heuristic for now

        let tick_rate_ms = std::env::var("CUPCAKE_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            colors_enabled,
            unicode_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels of the options on a screen (empty for Summary)
    pub fn option_labels(&self, screen: Screen) -> Vec<String> {
        match screen {
            Screen::Start => self.quantities.iter().map(|q| quantity_label(*q)).collect(),
            Screen::Flavor => self.flavors.clone(),
            Screen::Pickup => self.order.pickup_options.clone(),
            Screen::Summary => Vec::new(),
        }
    }

    /// Number of options on the current screen
    pub fn option_count(&self) -> usize {
        match self.current_screen {
            Screen::Start => self.quantities.len(),
            Screen::Flavor => self.flavors.len(),
            Screen::Pickup => self.order.pickup_options.len(),
            Screen::Summary => 0,
        }
    }

    /// Index of the value already chosen on a screen, if any
    pub fn selected_index(&self, screen: Screen) -> Option<usize> {
        match screen {
            Screen::Start => self.quantities.iter().position(|q| *q == self.order.quantity),
            Screen::Flavor => {
                let flavor = self.order.flavor.as_deref()?;
                self.flavors.iter().position(|f| f == flavor)
            }
            Screen::Pickup => {
                let date = self.order.date.as_deref()?;
                self.order.pickup_options.iter().position(|d| d == date)
            }
            Screen::Summary => None,
        }
    }

    /// Whether "Next" will be accepted on the current screen
    pub fn can_go_next(&self) -> bool {
        match self.current_screen {
            Screen::Flavor => self.order.flavor.is_some(),
            Screen::Pickup => self.order.date.is_some(),
            Screen::Start | Screen::Summary => false,
        }
    }
}
