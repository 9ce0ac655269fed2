//! Core types for Cartwheel.
//!
//! This module provides type-safe wrappers for identifiers and quantities.

pub mod id;
pub mod quantity;

pub use id::*;
pub use quantity::{Quantity, QuantityError};
