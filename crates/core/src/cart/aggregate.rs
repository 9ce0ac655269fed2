//! The cart aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::item::{CartItem, LineItem};
use crate::config::CartConfig;
use crate::types::{CartId, CartRef, ItemKey};

/// A shopping cart: an ordered collection of items plus lock and expiry
/// metadata.
///
/// Lock and expiry are advisory here. Every mutator succeeds regardless of
/// either flag; callers that want enforcement go through the `try_*`
/// methods on [`CartOps`](super::CartOps).
///
/// `total_items` is bookkeeping owned by the caller. Adding or removing
/// items never changes it.
///
/// Deserializing restores `items` exactly as stored. Like
/// [`set_items`](Self::set_items), it does not merge equal items or relink
/// back-references.
#[derive(Debug, Serialize, Deserialize)]
pub struct Cart<I = LineItem> {
    id: Option<CartId>,
    handle: CartRef,
    items: Vec<I>,
    total_items: i64,
    locked: bool,
    expires_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    config: CartConfig,
}

impl<I: CartItem> Default for Cart<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: CartItem> Cart<I> {
    /// Create an empty, unlocked cart expiring one default window from now.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CartConfig::default())
    }

    /// Create an empty, unlocked cart using `config`.
    #[must_use]
    pub fn with_config(config: CartConfig) -> Self {
        Self::with_config_at(config, Utc::now())
    }

    /// Create a cart as if constructed at `now`.
    #[must_use]
    pub fn with_config_at(config: CartConfig, now: DateTime<Utc>) -> Self {
        let mut cart = Self {
            id: None,
            handle: CartRef::generate(),
            items: Vec::new(),
            total_items: 0,
            locked: false,
            expires_at: None,
            config,
        };
        cart.increment_expires_at_from(now);
        cart
    }

    // =========================================================================
    // Identity & configuration
    // =========================================================================

    /// Storage identifier, `None` until the cart is first saved.
    #[must_use]
    pub const fn id(&self) -> Option<CartId> {
        self.id
    }

    pub const fn set_id(&mut self, id: Option<CartId>) {
        self.id = id;
    }

    /// The handle items point back at.
    #[must_use]
    pub const fn handle(&self) -> CartRef {
        self.handle
    }

    #[must_use]
    pub const fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Replace the configuration. Carts restored from storage start with the
    /// default and should be reconfigured by whoever loaded them.
    pub const fn set_config(&mut self, config: CartConfig) {
        self.config = config;
    }

    // =========================================================================
    // Items
    // =========================================================================

    #[must_use]
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Replace the whole collection as-is.
    ///
    /// No merging and no back-reference updates happen; this is a raw setter
    /// for storage layers rehydrating a cart.
    pub fn set_items(&mut self, items: Vec<I>) {
        self.items = items;
    }

    /// Look up an item by identity.
    #[must_use]
    pub fn item(&self, key: ItemKey) -> Option<&I> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Position of the first item that `equals()` the given one.
    #[must_use]
    pub fn find_by_equality(&self, item: &I) -> Option<usize> {
        self.items.iter().position(|existing| existing.equals(item))
    }

    /// Position of the item whose identity is `key`.
    #[must_use]
    pub fn find_by_identity(&self, key: ItemKey) -> Option<usize> {
        self.items.iter().position(|existing| existing.key() == key)
    }

    /// Add an item, merging it into an equal one if present.
    ///
    /// On a merge the existing item absorbs the incoming quantity and the
    /// incoming item is dropped without ever being linked to this cart.
    pub fn add_item(&mut self, mut item: I) {
        if let Some(existing) = self
            .find_by_equality(&item)
            .and_then(|index| self.items.get_mut(index))
        {
            existing.increment_quantity(item.quantity());
            debug!(
                cart = %self.handle,
                item = %existing.key(),
                added = %item.quantity(),
                quantity = %existing.quantity(),
                "Merged item into existing line"
            );
            return;
        }

        item.set_cart(Some(self.handle));
        debug!(
            cart = %self.handle,
            item = %item.key(),
            quantity = %item.quantity(),
            "Appended item"
        );
        self.items.push(item);
    }

    /// Remove the item whose identity is `key` and hand it back detached.
    ///
    /// Returns `None` if no such item is in the cart.
    pub fn remove_item(&mut self, key: ItemKey) -> Option<I> {
        let index = self.find_by_identity(key)?;
        let mut item = self.items.remove(index);
        item.set_cart(None);
        debug!(cart = %self.handle, item = %key, "Removed item");
        Some(item)
    }

    #[must_use]
    pub fn has_item(&self, key: ItemKey) -> bool {
        self.find_by_identity(key).is_some()
    }

    #[must_use]
    pub fn count_items(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count_items() == 0
    }

    /// Empty the cart, returning what it held.
    ///
    /// Returned items keep their back-reference to this cart and
    /// `total_items` is left alone. Use [`detach_items`](Self::detach_items)
    /// when the items should come back unlinked.
    pub fn clear_items(&mut self) -> Vec<I> {
        let drained = std::mem::take(&mut self.items);
        debug!(cart = %self.handle, count = drained.len(), "Cleared items");
        drained
    }

    /// Empty the cart and clear every returned item's back-reference.
    pub fn detach_items(&mut self) -> Vec<I> {
        let mut drained = self.clear_items();
        for item in &mut drained {
            item.set_cart(None);
        }
        drained
    }

    // =========================================================================
    // Total items counter
    // =========================================================================

    #[must_use]
    pub const fn total_items(&self) -> i64 {
        self.total_items
    }

    pub const fn set_total_items(&mut self, total_items: i64) {
        self.total_items = total_items;
    }

    /// Add `amount` to the counter. Negative amounts decrement; the result
    /// saturates at the `i64` bounds.
    pub const fn increment_total_items(&mut self, amount: i64) {
        self.total_items = self.total_items.saturating_add(amount);
    }

    pub const fn increment_total_items_by_one(&mut self) {
        self.increment_total_items(1);
    }

    // =========================================================================
    // Lock
    // =========================================================================

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    pub const fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    // =========================================================================
    // Expiration
    // =========================================================================

    #[must_use]
    pub const fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub const fn set_expires_at(&mut self, expires_at: Option<DateTime<Utc>>) {
        self.expires_at = expires_at;
    }

    /// Whether the cart has expired as of now.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Whether the cart has expired as of `now`.
    ///
    /// A cart with no expiration time counts as expired.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_none_or(|expires_at| expires_at < now)
    }

    /// Reset the expiration to one window from now.
    ///
    /// This overwrites the previous value; it does not extend it.
    pub fn increment_expires_at(&mut self) {
        self.increment_expires_at_from(Utc::now());
    }

    /// Reset the expiration to one window from `now`.
    pub fn increment_expires_at_from(&mut self, now: DateTime<Utc>) {
        let expires_at = now
            .checked_add_signed(self.config.expiration_window())
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        debug!(cart = %self.handle, %expires_at, "Renewed expiration");
        self.expires_at = Some(expires_at);
    }
}
