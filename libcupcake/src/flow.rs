//! Navigation and flow control for the ordering wizard
//!
//! The wizard is a strictly linear sequence of four screens:
//!
//! ```text
//! Start -> Flavor -> Pickup -> Summary
//! ```
//!
//! Visited screens are kept on an explicit [`BackStack`]. Forward moves
//! push, "up" pops one entry, and cancel pops everything above the root
//! after resetting the order.
//!
//! [`FlowController`] is the single place where intents coming from the
//! UI touch the order state holder and the back-stack.

use std::fmt;

use crossbeam_channel::Receiver;
use tracing::{debug, info};

use crate::error::Result;
use crate::order::{OrderSnapshot, OrderStore};
use crate::share::{OrderSummary, ShareTarget};

/// One step of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Choose a quantity
    Start,
    /// Choose a flavor
    Flavor,
    /// Choose a pickup date
    Pickup,
    /// Review, send or cancel
    Summary,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Start, Screen::Flavor, Screen::Pickup, Screen::Summary];

    /// Title shown in the title bar
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Start => "Cupcake",
            Screen::Flavor => "Choose Flavor",
            Screen::Pickup => "Choose Pickup Date",
            Screen::Summary => "Order Summary",
        }
    }

    /// The only screen reachable by moving forward
    pub fn next(&self) -> Option<Screen> {
        match self {
            Screen::Start => Some(Screen::Flavor),
            Screen::Flavor => Some(Screen::Pickup),
            Screen::Pickup => Some(Screen::Summary),
            Screen::Summary => None,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Start => "start",
            Screen::Flavor => "flavor",
            Screen::Pickup => "pickup",
            Screen::Summary => "summary",
        };
        f.write_str(name)
    }
}

/// Ordered record of visited screens; the last entry is current
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackStack {
    entries: Vec<Screen>,
}

impl BackStack {
    pub fn new() -> Self {
        Self {
            entries: vec![Screen::Start],
        }
    }

    /// Top of the stack, or Start if the stack is empty
    pub fn current(&self) -> Screen {
        self.entries.last().copied().unwrap_or(Screen::Start)
    }

    pub fn entries(&self) -> &[Screen] {
        &self.entries
    }

    /// True when something sits above the root entry
    pub fn can_navigate_back(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn push(&mut self, screen: Screen) {
        self.entries.push(screen);
    }

    /// Pop the current screen unless it is the root
    pub fn navigate_up(&mut self) -> bool {
        if self.can_navigate_back() {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Drop every entry above the root
    pub fn pop_to_root(&mut self) {
        self.entries.truncate(1);
        if self.entries.is_empty() {
            self.entries.push(Screen::Start);
        }
    }
}

impl Default for BackStack {
    fn default() -> Self {
        Self::new()
    }
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Pick a quantity on Start and move on to Flavor
    SelectQuantity(u32),
    /// Highlight a flavor on Flavor
    SelectFlavor(String),
    /// Highlight a pickup date on Pickup
    SelectDate(String),
    /// Move to the next screen
    Next,
    /// Move to the previous screen
    NavigateUp,
    /// Reset the order and return to Start
    Cancel,
    /// Share the order from Summary
    Send,
}

/// Result of applying an intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The current screen changed
    Moved { from: Screen, to: Screen },
    /// The order changed but the screen did not
    Updated,
    /// The order was handed to the share target
    Shared(OrderSummary),
    /// The intent does not apply to the current screen
    Ignored,
}

/// Owns the back-stack, the order state holder and the share target
pub struct FlowController {
    stack: BackStack,
    order: OrderStore,
    share: Box<dyn ShareTarget>,
}

impl FlowController {
    pub fn new(order: OrderStore, share: Box<dyn ShareTarget>) -> Self {
        Self {
            stack: BackStack::new(),
            order,
            share,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.stack.current()
    }

    pub fn can_navigate_back(&self) -> bool {
        self.stack.can_navigate_back()
    }

    pub fn back_stack(&self) -> &BackStack {
        &self.stack
    }

    pub fn order(&self) -> &OrderSnapshot {
        self.order.snapshot()
    }

    /// Subscribe to order snapshots
    pub fn subscribe(&mut self) -> Receiver<OrderSnapshot> {
        self.order.subscribe()
    }

    /// Apply one intent
    ///
    /// Only `Send` can fail, and only when the share target cannot accept
    /// the order.
    pub fn handle(&mut self, intent: Intent) -> Result<Outcome> {
        let screen = self.current_screen();
        let outcome = match (intent, screen) {
            (Intent::SelectQuantity(quantity), Screen::Start) => {
                self.order.set_quantity(quantity);
                self.navigate_forward()
            }
            (Intent::SelectFlavor(flavor), Screen::Flavor) => {
                self.order.set_flavor(flavor);
                Outcome::Updated
            }
            (Intent::SelectDate(date), Screen::Pickup) => {
                self.order.set_date(date);
                Outcome::Updated
            }
            (Intent::Next, _) => self.navigate_forward(),
            (Intent::NavigateUp, _) => self.navigate_up(),
            (Intent::Cancel, _) => self.cancel(),
            (Intent::Send, Screen::Summary) => Outcome::Shared(self.send()?),
            (intent, screen) => {
                debug!(?intent, %screen, "Intent ignored on this screen");
                Outcome::Ignored
            }
        };
        Ok(outcome)
    }

    /// Push the next screen if the current one has its selection
    pub fn navigate_forward(&mut self) -> Outcome {
        let from = self.current_screen();
        let Some(to) = from.next() else {
            debug!(%from, "No screen after this one");
            return Outcome::Ignored;
        };
        if !self.selection_made(from) {
            debug!(%from, "Selection required before moving on");
            return Outcome::Ignored;
        }
        self.stack.push(to);
        info!(%from, %to, "Navigated forward");
        Outcome::Moved { from, to }
    }

    /// Pop back to the previous screen
    pub fn navigate_up(&mut self) -> Outcome {
        let from = self.current_screen();
        if self.stack.navigate_up() {
            let to = self.current_screen();
            info!(%from, %to, "Navigated up");
            Outcome::Moved { from, to }
        } else {
            Outcome::Ignored
        }
    }

    /// Reset the order and return to Start
    pub fn cancel(&mut self) -> Outcome {
        let from = self.current_screen();
        self.order.reset_order();
        self.stack.pop_to_root();
        info!(%from, "Order canceled");
        if from == Screen::Start {
            Outcome::Updated
        } else {
            Outcome::Moved {
                from,
                to: Screen::Start,
            }
        }
    }

    /// Share the current order without changing screens
    pub fn send(&mut self) -> Result<OrderSummary> {
        let summary = OrderSummary::from_snapshot(self.order.snapshot());
        self.share.share(&summary.subject, &summary.body)?;
        info!(share_target = %self.share.name(), "Order sent");
        Ok(summary)
    }

    fn selection_made(&self, screen: Screen) -> bool {
        let order = self.order.snapshot();
        match screen {
            Screen::Start => order.quantity > 0,
            Screen::Flavor => order.flavor.is_some(),
            Screen::Pickup => order.date.is_some(),
            Screen::Summary => true,
        }
    }
}
