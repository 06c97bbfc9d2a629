//! Flow controller adapter for the TUI
//!
//! `ServiceHandle` owns the [`FlowController`] and the order subscription,
//! and turns everything the controller does into [`Action`]s for the
//! reducer. The event loop never touches the controller directly.
//!
//! # Example
//!
//! ```no_run
//! use cupcake_tui::services::ServiceHandle;
//! use cupcake_tui::{reduce, AppState};
//! use libcupcake::{Config, Intent};
//!
//! # fn example() -> cupcake_tui::Result<()> {
//! let mut services = ServiceHandle::new(&Config::default())?;
//! let mut state = AppState::new();
//!
//! for action in services.dispatch(Intent::SelectQuantity(12)) {
//!     state = reduce(state, action);
//! }
//! assert_eq!(state.order.quantity, 12);
//! # Ok(())
//! # }
//! ```

use crossbeam_channel::Receiver;
use libcupcake::flow::Outcome;
use libcupcake::{share, Config, FlowController, Intent, OrderSnapshot, OrderStore};
use tracing::{error, info};

use crate::app::Action;
use crate::error::Result;

/// Handle to the order flow for the TUI event loop
pub struct ServiceHandle {
    controller: FlowController,
    updates: Receiver<OrderSnapshot>,
}

impl ServiceHandle {
    /// Build the order store, share target and flow controller from config
    ///
    /// # Errors
    ///
    /// Returns an error if the configured share command is unusable.
    pub fn new(config: &Config) -> Result<Self> {
        let order = OrderStore::new(config.pricing(), config.pickup.days);
        let target = share::target_for(config.share_command()).map_err(libcupcake::CupcakeError::from)?;
        info!(share_target = target.name(), "Order flow ready");
        Ok(Self::from_controller(FlowController::new(order, target)))
    }

    /// Wrap an existing controller (tests pin the clock and share target)
    pub fn from_controller(mut controller: FlowController) -> Self {
        let updates = controller.subscribe();
        Self {
            controller,
            updates,
        }
    }

    pub fn controller(&self) -> &FlowController {
        &self.controller
    }

    /// Actions that bring a fresh `AppState` in line with the controller
    pub fn initial_actions(&self) -> Vec<Action> {
        let mut actions = self.drain_updates();
        actions.push(self.navigation());
        actions
    }

    /// Apply an intent and report what changed
    ///
    /// Order updates come first so the reducer can place the highlight on
    /// the new screen using the latest order.
    pub fn dispatch(&mut self, intent: Intent) -> Vec<Action> {
        let result = self.controller.handle(intent);
        let mut actions = self.drain_updates();

        match result {
            Ok(Outcome::Moved { .. }) => actions.push(self.navigation()),
            Ok(Outcome::Shared(summary)) => {
                actions.push(Action::SetStatus(format!("{} sent", summary.subject)));
            }
            Ok(Outcome::Updated) | Ok(Outcome::Ignored) => {}
            Err(e) => {
                error!(error = %e, "Intent failed");
                actions.push(Action::ShowError(e.to_string()));
            }
        }
        actions
    }

    /// Pending order snapshots as actions
    pub fn drain_updates(&self) -> Vec<Action> {
        self.updates.try_iter().map(Action::OrderUpdated).collect()
    }

    fn navigation(&self) -> Action {
        Action::Navigated {
            screen: self.controller.current_screen(),
            can_navigate_back: self.controller.can_navigate_back(),
        }
    }
}
