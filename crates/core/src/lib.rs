//! Cartwheel Core - in-memory shopping cart model.
//!
//! This crate holds the cart aggregate and the types around it. Storage,
//! pricing, and checkout live in the layers that consume it.
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no database access, no
//! HTTP clients. The one piece of I/O is reading [`CartConfig`] from the
//! environment.
//!
//! # Modules
//!
//! - [`cart`] - The `Cart` aggregate, the `CartItem` contract, and guarded operations
//! - [`config`] - Expiration window configuration
//! - [`types`] - Newtype wrappers for IDs, handles, and quantities
//!
//! # Example
//!
//! ```
//! use cartwheel_core::{Cart, CartItem, LineItem, Quantity, VariantId};
//!
//! let mut cart: Cart = Cart::new();
//! cart.add_item(LineItem::new(VariantId::new(1), Quantity::new(2).unwrap()));
//! cart.add_item(LineItem::new(VariantId::new(1), Quantity::new(3).unwrap()));
//!
//! assert_eq!(cart.count_items(), 1);
//! assert_eq!(cart.items()[0].quantity().get(), 5);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod types;

pub use cart::{Cart, CartError, CartItem, CartOps, LineItem};
pub use config::{CartConfig, ConfigError};
pub use types::*;
