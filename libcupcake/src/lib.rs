//! Cupcake - a four-step cupcake ordering wizard
//!
//! This library holds everything the wizard needs apart from rendering:
//! the order state holder, the fixed option tables, the navigation flow
//! controller, and the share collaborator that hands a finished order to
//! another program.

pub mod config;
pub mod error;
pub mod flow;
pub mod logging;
pub mod options;
pub mod order;
pub mod share;

// Re-export commonly used types
pub use config::Config;
pub use error::{CupcakeError, Result};
pub use flow::{BackStack, FlowController, Intent, Screen};
pub use options::{Price, Pricing};
pub use order::{OrderSnapshot, OrderStore};
pub use share::{OrderSummary, ShareTarget};
