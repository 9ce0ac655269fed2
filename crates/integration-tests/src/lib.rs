//! Integration tests for Cartwheel.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cartwheel-integration-tests
//!
//! # With cart events printed
//! RUST_LOG=cartwheel_core=debug cargo test -p cartwheel-integration-tests -- --nocapture
//! ```
//!
//! # Test Categories
//!
//! - `cart_items` - Merge, identity, and removal behavior
//! - `cart_lifecycle` - Lock and expiration behavior
//! - `cart_adapter` - Wrapping a cart behind `CartOps`

use std::sync::Once;

use cartwheel_core::{LineItem, Quantity, VariantId};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-friendly subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to `warn`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Build a line item for `variant` with `quantity` units.
///
/// # Panics
///
/// Panics if `quantity` is zero.
#[must_use]
pub fn line(variant: i32, quantity: u32) -> LineItem {
    LineItem::new(
        VariantId::new(variant),
        Quantity::new(quantity).expect("test quantities are positive"),
    )
}
