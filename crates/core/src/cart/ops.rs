//! Capability interface over carts.
//!
//! Storage-specific cart types wrap a [`Cart`] and implement this trait by
//! forwarding, so code that only needs cart behavior can stay generic.

use chrono::{DateTime, Utc};
use tracing::warn;

use super::aggregate::Cart;
use super::error::CartError;
use super::item::CartItem;
use crate::types::{CartRef, ItemKey};

/// The operations surrounding layers rely on.
///
/// The required methods are permissive, matching [`Cart`]. The provided
/// `try_*` methods refuse to mutate a locked or expired cart.
pub trait CartOps {
    type Item: CartItem;

    fn handle(&self) -> CartRef;

    fn items(&self) -> &[Self::Item];

    fn add_item(&mut self, item: Self::Item);

    fn remove_item(&mut self, key: ItemKey) -> Option<Self::Item>;

    fn has_item(&self, key: ItemKey) -> bool;

    fn clear_items(&mut self) -> Vec<Self::Item>;

    fn is_locked(&self) -> bool;

    fn expires_at(&self) -> Option<DateTime<Utc>>;

    fn is_expired_at(&self, now: DateTime<Utc>) -> bool;

    fn count_items(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.count_items() == 0
    }

    fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Check that the cart may be mutated as of `now`.
    ///
    /// The lock is checked before expiry.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Locked`] or [`CartError::Expired`].
    fn ensure_mutable_at(&self, now: DateTime<Utc>) -> Result<(), CartError> {
        if self.is_locked() {
            warn!(cart = %self.handle(), "Refusing to modify locked cart");
            return Err(CartError::Locked);
        }
        if self.is_expired_at(now) {
            let expires_at = self.expires_at();
            warn!(cart = %self.handle(), ?expires_at, "Refusing to modify expired cart");
            return Err(CartError::Expired { expires_at });
        }
        Ok(())
    }

    /// Check that the cart may be mutated right now.
    ///
    /// # Errors
    ///
    /// See [`ensure_mutable_at`](Self::ensure_mutable_at).
    fn ensure_mutable(&self) -> Result<(), CartError> {
        self.ensure_mutable_at(Utc::now())
    }

    /// [`add_item`](Self::add_item), unless the cart is locked or expired.
    ///
    /// # Errors
    ///
    /// Returns the [`CartError`] from [`ensure_mutable`](Self::ensure_mutable);
    /// the item is dropped in that case.
    fn try_add_item(&mut self, item: Self::Item) -> Result<(), CartError> {
        self.ensure_mutable()?;
        self.add_item(item);
        Ok(())
    }

    /// [`remove_item`](Self::remove_item), unless the cart is locked or expired.
    ///
    /// # Errors
    ///
    /// Returns the [`CartError`] from [`ensure_mutable`](Self::ensure_mutable).
    fn try_remove_item(&mut self, key: ItemKey) -> Result<Option<Self::Item>, CartError> {
        self.ensure_mutable()?;
        Ok(self.remove_item(key))
    }

    /// [`clear_items`](Self::clear_items), unless the cart is locked or expired.
    ///
    /// # Errors
    ///
    /// Returns the [`CartError`] from [`ensure_mutable`](Self::ensure_mutable).
    fn try_clear_items(&mut self) -> Result<Vec<Self::Item>, CartError> {
        self.ensure_mutable()?;
        Ok(self.clear_items())
    }
}

impl<I: CartItem> CartOps for Cart<I> {
    type Item = I;

    fn handle(&self) -> CartRef {
        Self::handle(self)
    }

    fn items(&self) -> &[I] {
        Self::items(self)
    }

    fn add_item(&mut self, item: I) {
        Self::add_item(self, item);
    }

    fn remove_item(&mut self, key: ItemKey) -> Option<I> {
        Self::remove_item(self, key)
    }

    fn has_item(&self, key: ItemKey) -> bool {
        Self::has_item(self, key)
    }

    fn clear_items(&mut self) -> Vec<I> {
        Self::clear_items(self)
    }

    fn is_locked(&self) -> bool {
        Self::is_locked(self)
    }

    fn expires_at(&self) -> Option<DateTime<Utc>> {
        Self::expires_at(self)
    }

    fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        Self::is_expired_at(self, now)
    }
}
