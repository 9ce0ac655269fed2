//! The cart aggregate and the item contract it depends on.
//!
//! - [`Cart`] - concrete aggregate; merges equal items on add, removes by identity
//! - [`CartItem`] - what an item must provide (equality, quantity, back-reference)
//! - [`LineItem`] - stock item keyed by product variant
//! - [`CartOps`] - capability trait, including lock/expiry-guarded `try_*` mutators
//! - [`CartError`] - refusals from the guarded mutators

pub mod aggregate;
pub mod error;
pub mod item;
pub mod ops;

pub use aggregate::Cart;
pub use error::CartError;
pub use item::{CartItem, LineItem};
pub use ops::CartOps;
