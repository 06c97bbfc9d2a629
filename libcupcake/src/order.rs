//! Order state holder
//!
//! `OrderStore` owns the in-progress order and publishes an immutable
//! `OrderSnapshot` to every subscriber after each mutation.
//!
//! # Subscriptions
//!
//! Subscribers receive snapshots over unbounded crossbeam channels. A new
//! subscriber immediately receives the current snapshot, then one snapshot
//! per change. Receivers that have been dropped are pruned on the next
//! notification, so there is no explicit unsubscribe.
//!
//! # Example
//!
//! ```
//! use libcupcake::order::OrderStore;
//! use libcupcake::options::Pricing;
//!
//! let mut store = OrderStore::new(Pricing::default(), 4);
//! let updates = store.subscribe();
//!
//! store.set_quantity(12);
//!
//! let initial = updates.try_recv().unwrap();
//! assert_eq!(initial.quantity, 0);
//! let latest = updates.try_recv().unwrap();
//! assert_eq!(latest.price.cents(), 2400);
//! ```

use chrono::NaiveDate;
use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::debug;

use crate::options::{pickup_options, Price, Pricing};

/// Source of "today" for pickup date generation
pub type Clock = Box<dyn Fn() -> NaiveDate>;

/// Immutable view of the order at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSnapshot {
    /// Number of cupcakes (0 until chosen)
    pub quantity: u32,

    /// Chosen flavor
    pub flavor: Option<String>,

    /// Chosen pickup date label
    pub date: Option<String>,

    /// Subtotal, always `quantity * unit_price`
    pub price: Price,

    /// Pickup dates on offer, starting today
    pub pickup_options: Vec<String>,
}

/// Mutable holder for the in-progress order
pub struct OrderStore {
    state: OrderSnapshot,
    pricing: Pricing,
    pickup_days: usize,
    clock: Clock,
    subscribers: Vec<Sender<OrderSnapshot>>,
}

impl OrderStore {
    /// Create a store whose pickup dates start at the local calendar date
    pub fn new(pricing: Pricing, pickup_days: usize) -> Self {
        Self::with_clock(pricing, pickup_days, || chrono::Local::now().date_naive())
    }

    /// Create a store with an explicit source of "today"
    pub fn with_clock<F>(pricing: Pricing, pickup_days: usize, clock: F) -> Self
    where
        F: Fn() -> NaiveDate + 'static,
    {
        let clock: Clock = Box::new(clock);
        let state = Self::initial_state(&pricing, pickup_days, &clock);
        Self {
            state,
            pricing,
            pickup_days,
            clock,
            subscribers: Vec::new(),
        }
    }

    fn initial_state(pricing: &Pricing, pickup_days: usize, clock: &Clock) -> OrderSnapshot {
        OrderSnapshot {
            quantity: 0,
            flavor: None,
            date: None,
            price: pricing.price_for(0),
            pickup_options: pickup_options(clock(), pickup_days),
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> &OrderSnapshot {
        &self.state
    }

    pub fn pricing(&self) -> Pricing {
        self.pricing
    }

    /// Subscribe to snapshot updates
    ///
    /// The returned receiver already holds the current snapshot.
    pub fn subscribe(&mut self) -> Receiver<OrderSnapshot> {
        let (tx, rx) = unbounded();
        // The receiver is alive, so this send cannot fail
        let _ = tx.send(self.state.clone());
        self.subscribers.push(tx);
        rx
    }

    /// Number of live subscribers as of the last notification
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Record the quantity and recompute the price
    pub fn set_quantity(&mut self, quantity: u32) {
        self.state.quantity = quantity;
        self.state.price = self.pricing.price_for(quantity);
        debug!(quantity, price = %self.state.price, "Quantity set");
        self.notify();
    }

    /// Record the flavor; the price is unaffected
    pub fn set_flavor(&mut self, flavor: impl Into<String>) {
        let flavor = flavor.into();
        debug!(flavor = %flavor, "Flavor set");
        self.state.flavor = Some(flavor);
        self.notify();
    }

    /// Record the pickup date; the price is unaffected
    pub fn set_date(&mut self, date: impl Into<String>) {
        let date = date.into();
        debug!(date = %date, "Pickup date set");
        self.state.date = Some(date);
        self.notify();
    }

    /// Restore defaults and regenerate pickup dates from today
    pub fn reset_order(&mut self) {
        self.state = Self::initial_state(&self.pricing, self.pickup_days, &self.clock);
        debug!("Order reset");
        self.notify();
    }

    fn notify(&mut self) {
        let snapshot = &self.state;
        self.subscribers.retain(|tx| tx.send(snapshot.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{DEFAULT_PICKUP_DAYS, QUANTITY_OPTIONS};
    use std::cell::Cell;
    use std::rc::Rc;

    fn fixed_store() -> OrderStore {
        OrderStore::with_clock(Pricing::default(), DEFAULT_PICKUP_DAYS, || {
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
        })
    }

    #[test]
    fn test_initial_snapshot() {
        let store = fixed_store();
        let snapshot = store.snapshot();

        assert_eq!(snapshot.quantity, 0);
        assert!(snapshot.flavor.is_none());
        assert!(snapshot.date.is_none());
        assert_eq!(snapshot.price, Price::ZERO);
        assert_eq!(snapshot.pickup_options.len(), DEFAULT_PICKUP_DAYS);
        assert_eq!(snapshot.pickup_options[0], "Fri Oct 16");
    }

    #[test]
    fn test_set_quantity_recomputes_price() {
        let mut store = fixed_store();
        let unit = store.pricing().unit_price;

        for quantity in QUANTITY_OPTIONS {
            store.set_quantity(quantity);
            assert_eq!(store.snapshot().price, unit.times(quantity));
        }
    }

    #[test]
    fn test_set_flavor_does_not_change_price() {
        let mut store = fixed_store();
        store.set_quantity(6);
        let before = store.snapshot().price;

        store.set_flavor("Chocolate");

        assert_eq!(store.snapshot().flavor.as_deref(), Some("Chocolate"));
        assert_eq!(store.snapshot().price, before);
    }

    #[test]
    fn test_set_date_records_value() {
        let mut store = fixed_store();
        store.set_date("Sat Oct 17");
        assert_eq!(store.snapshot().date.as_deref(), Some("Sat Oct 17"));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut store = fixed_store();
        store.set_quantity(24);
        store.set_flavor("Coffee");
        store.set_date("Mon Oct 19");

        store.reset_order();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.quantity, 0);
        assert!(snapshot.flavor.is_none());
        assert!(snapshot.date.is_none());
        assert_eq!(snapshot.price, Price::ZERO);
    }

    #[test]
    fn test_reset_regenerates_pickup_dates_from_today() {
        let day = Rc::new(Cell::new(16));
        let clock_day = Rc::clone(&day);
        let mut store = OrderStore::with_clock(Pricing::default(), 2, move || {
            NaiveDate::from_ymd_opt(2026, 10, clock_day.get()).unwrap()
        });
        assert_eq!(store.snapshot().pickup_options, vec!["Fri Oct 16", "Sat Oct 17"]);

        day.set(18);
        store.reset_order();

        assert_eq!(store.snapshot().pickup_options, vec!["Sun Oct 18", "Mon Oct 19"]);
    }

    #[test]
    fn test_subscriber_receives_initial_and_updates() {
        let mut store = fixed_store();
        let rx = store.subscribe();

        store.set_quantity(12);
        store.set_flavor("Vanilla");

        let received: Vec<OrderSnapshot> = rx.try_iter().collect();
        assert_eq!(received.len(), 3);
        assert_eq!(received[0].quantity, 0);
        assert_eq!(received[1].quantity, 12);
        assert_eq!(received[2].flavor.as_deref(), Some("Vanilla"));
    }

    #[test]
    fn test_multiple_subscribers() {
        let mut store = fixed_store();
        let rx1 = store.subscribe();
        let rx2 = store.subscribe();

        store.set_quantity(6);

        assert_eq!(rx1.try_iter().count(), 2);
        assert_eq!(rx2.try_iter().count(), 2);
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut store = fixed_store();
        let rx = store.subscribe();
        let _kept = store.subscribe();
        assert_eq!(store.subscriber_count(), 2);

        drop(rx);
        store.set_quantity(6);

        assert_eq!(store.subscriber_count(), 1);
    }
}
