//! Fixed option tables and pricing
//!
//! The wizard only ever offers values from these tables, so the order
//! state holder never has to validate its inputs.

use chrono::{Days, NaiveDate};
use std::fmt;

/// Quantities offered on the Start screen
pub const QUANTITY_OPTIONS: [u32; 3] = [6, 12, 24];

/// Flavors offered on the Flavor screen
pub const FLAVORS: [&str; 5] = ["Vanilla", "Chocolate", "Red Velvet", "Salted Caramel", "Coffee"];

/// Price of a single cupcake in cents
pub const DEFAULT_UNIT_PRICE_CENTS: u64 = 200;

/// Number of consecutive pickup days offered, starting today
pub const DEFAULT_PICKUP_DAYS: usize = 4;

/// Upper bound on configured pickup days
pub const MAX_PICKUP_DAYS: usize = 31;

/// Display format for pickup dates (e.g. `Fri Oct 16`)
pub const PICKUP_DATE_FORMAT: &str = "%a %b %-d";

/// Money amount held in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_cents(cents: u64) -> Self {
        Price(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Price of `quantity` items at this unit price
    ///
    /// Saturates at `u64::MAX` cents; config validation keeps real prices
    /// well below that.
    pub fn times(self, quantity: u32) -> Price {
        Price(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Like [`Price::times`], but `None` on overflow
    pub fn checked_times(self, quantity: u32) -> Option<Price> {
        self.0.checked_mul(u64::from(quantity)).map(Price)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Fixed pricing rule: `price = quantity * unit_price`
///
/// Flavor and pickup date never affect the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pricing {
    pub unit_price: Price,
}

impl Pricing {
    pub fn new(unit_price: Price) -> Self {
        Self { unit_price }
    }

    pub fn price_for(&self, quantity: u32) -> Price {
        self.unit_price.times(quantity)
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Self::new(Price::from_cents(DEFAULT_UNIT_PRICE_CENTS))
    }
}

/// Label shown next to a quantity choice
pub fn quantity_label(quantity: u32) -> String {
    format!("{} cupcakes", quantity)
}

/// Generate `days` consecutive pickup date labels starting at `today`
pub fn pickup_options(today: NaiveDate, days: usize) -> Vec<String> {
    (0..days as u64)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .map(|date| date.format(PICKUP_DATE_FORMAT).to_string())
        .collect()
}
