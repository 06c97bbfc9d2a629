//! Integration tests for the ordering wizard
//!
//! Drives the flow controller the same way the terminal UI does and
//! checks the order state, the back-stack and the shared summary.

use chrono::NaiveDate;
use libcupcake::flow::Outcome;
use libcupcake::options::{Pricing, FLAVORS, QUANTITY_OPTIONS};
use libcupcake::share::MemoryShare;
use libcupcake::{Config, FlowController, Intent, OrderStore, Screen};

/// Setup a controller pinned to 2026-10-16 with an in-memory share target
fn setup_controller(pricing: Pricing) -> (FlowController, MemoryShare) {
    let order = OrderStore::with_clock(pricing, 4, || NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
    let share = MemoryShare::new();
    (FlowController::new(order, Box::new(share.clone())), share)
}

#[test]
fn test_complete_order_is_shared() {
    let (mut controller, share) = setup_controller(Pricing::default());
    let unit = Pricing::default().unit_price;

    // Step 1: quantity
    controller.handle(Intent::SelectQuantity(12)).unwrap();
    assert_eq!(controller.current_screen(), Screen::Flavor);

    // Step 2: flavor
    controller.handle(Intent::SelectFlavor("Vanilla".to_string())).unwrap();
    controller.handle(Intent::Next).unwrap();
    assert_eq!(controller.current_screen(), Screen::Pickup);

    // Step 3: pickup date
    let date = controller.order().pickup_options[1].clone();
    controller.handle(Intent::SelectDate(date.clone())).unwrap();
    controller.handle(Intent::Next).unwrap();
    assert_eq!(controller.current_screen(), Screen::Summary);

    // Summary shows the subtotal
    assert_eq!(controller.order().price, unit.times(12));

    // Step 4: send
    let outcome = controller.handle(Intent::Send).unwrap();
    assert!(matches!(outcome, Outcome::Shared(_)));
    assert_eq!(controller.current_screen(), Screen::Summary);

    let shared = share.shared();
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].subject, "New Cupcake Order");
    assert!(shared[0].body.contains("Vanilla"));
    assert!(shared[0].body.contains(&date));
    assert!(shared[0].body.contains(&unit.times(12).to_string()));

    // The user can still go back after sending
    assert!(controller.can_navigate_back());
    controller.handle(Intent::NavigateUp).unwrap();
    assert_eq!(controller.current_screen(), Screen::Pickup);
}

#[test]
fn test_price_tracks_every_quantity_option() {
    let pricing = Pricing::default();
    for quantity in QUANTITY_OPTIONS {
        let (mut controller, _) = setup_controller(pricing);
        controller.handle(Intent::SelectQuantity(quantity)).unwrap();
        assert_eq!(controller.order().price, pricing.price_for(quantity));
    }
}

#[test]
fn test_configured_unit_price_flows_through() {
    let mut config = Config::default();
    config.pricing.unit_price_cents = 350;
    let (mut controller, _) = setup_controller(config.pricing());

    controller.handle(Intent::SelectQuantity(6)).unwrap();

    assert_eq!(controller.order().price.cents(), 2100);
    assert_eq!(controller.order().price.to_string(), "$21.00");
}

#[test]
fn test_cancel_after_going_back_and_forth() {
    let (mut controller, _) = setup_controller(Pricing::default());

    controller.handle(Intent::SelectQuantity(24)).unwrap();
    controller.handle(Intent::SelectFlavor(FLAVORS[3].to_string())).unwrap();
    controller.handle(Intent::Next).unwrap();
    controller.handle(Intent::NavigateUp).unwrap();
    controller.handle(Intent::Next).unwrap();
    assert_eq!(
        controller.back_stack().entries(),
        &[Screen::Start, Screen::Flavor, Screen::Pickup]
    );

    controller.handle(Intent::Cancel).unwrap();

    assert_eq!(controller.back_stack().entries(), &[Screen::Start]);
    assert!(!controller.can_navigate_back());
    assert_eq!(controller.order().quantity, 0);
    assert!(controller.order().flavor.is_none());
}

#[test]
fn test_subscriber_follows_the_wizard() {
    let (mut controller, _) = setup_controller(Pricing::default());
    let updates = controller.subscribe();

    controller.handle(Intent::SelectQuantity(6)).unwrap();
    controller.handle(Intent::SelectFlavor("Coffee".to_string())).unwrap();
    controller.handle(Intent::Cancel).unwrap();

    let snapshots: Vec<_> = updates.try_iter().collect();
    assert_eq!(snapshots.len(), 4);
    assert_eq!(snapshots[1].quantity, 6);
    assert_eq!(snapshots[2].flavor.as_deref(), Some("Coffee"));
    assert_eq!(snapshots[3].quantity, 0);
    assert!(snapshots[3].flavor.is_none());
}
