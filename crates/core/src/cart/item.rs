//! The item contract a cart relies on, and the stock line item.

use serde::{Deserialize, Serialize};

use crate::types::{CartRef, ItemKey, Quantity, VariantId};

/// Capabilities a cart needs from the things it holds.
///
/// Two relations are in play and must not be confused:
///
/// - [`equals`](Self::equals) decides whether an incoming item should be
///   merged into an existing one.
/// - [`key`](Self::key) is the item's identity, used for removal and
///   membership checks.
pub trait CartItem {
    /// Identity of this item instance.
    fn key(&self) -> ItemKey;

    /// Units of this item.
    fn quantity(&self) -> Quantity;

    /// Add `amount` units.
    fn increment_quantity(&mut self, amount: Quantity);

    /// Whether `other` describes the same purchasable thing.
    fn equals(&self, other: &Self) -> bool;

    /// The cart this item currently belongs to, if any.
    fn cart(&self) -> Option<CartRef>;

    /// Point the back-reference at `cart`, or clear it.
    fn set_cart(&mut self, cart: Option<CartRef>);
}

/// A quantity of one product variant.
///
/// Line items are `equals()` when they reference the same variant. Each one
/// gets its own [`ItemKey`] on construction, so two lines for the same
/// variant are still distinct instances.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineItem {
    key: ItemKey,
    variant_id: VariantId,
    quantity: Quantity,
    cart: Option<CartRef>,
}

impl LineItem {
    /// Create a detached line item.
    #[must_use]
    pub fn new(variant_id: VariantId, quantity: Quantity) -> Self {
        Self {
            key: ItemKey::generate(),
            variant_id,
            quantity,
            cart: None,
        }
    }

    /// The variant this line is for.
    #[must_use]
    pub const fn variant_id(&self) -> VariantId {
        self.variant_id
    }

    /// Overwrite the quantity.
    pub const fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}

impl CartItem for LineItem {
    fn key(&self) -> ItemKey {
        self.key
    }

    fn quantity(&self) -> Quantity {
        self.quantity
    }

    fn increment_quantity(&mut self, amount: Quantity) {
        self.quantity.increment(amount);
    }

    fn equals(&self, other: &Self) -> bool {
        self.variant_id == other.variant_id
    }

    fn cart(&self) -> Option<CartRef> {
        self.cart
    }

    fn set_cart(&mut self, cart: Option<CartRef>) {
        self.cart = cart;
    }
}
