//! Integration tests for Order Link.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p order-link-integration-tests
//! ```
//!
//! Set `RUST_LOG=order_link_checkout=debug` to see the builder's tracing
//! output in failing tests.

use std::sync::Once;

use order_link_checkout::{CheckoutConfig, OrderBuilder};
use order_link_core::{Cart, CartLineItem, PhoneNumber, Quantity};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Builder pointed at a placeholder destination number.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn test_builder() -> OrderBuilder {
    OrderBuilder::new(CheckoutConfig::new(PhoneNumber::parse("000000000").unwrap()))
}

/// Cart built from `(id, title, price, quantity)` tuples.
///
/// # Panics
///
/// Panics on zero quantities or duplicate IDs.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn cart_of(items: &[(&str, &str, Decimal, u32)]) -> Cart {
    Cart::from_items(
        items
            .iter()
            .map(|&(id, title, price, quantity)| {
                CartLineItem::new(id, title, price, Quantity::new(quantity).unwrap())
            })
            .collect(),
    )
    .unwrap()
}
