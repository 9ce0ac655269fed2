//! Identifiers for carts and their contents.
//!
//! Two families live here:
//!
//! - Persistent IDs (`CartId`, `VariantId`) are `i32` newtypes assigned by
//!   whatever stores carts, generated with the `define_id!` macro.
//! - In-memory handles (`CartRef`, `ItemKey`) are random UUIDs minted at
//!   construction time. They exist before anything is saved and are what the
//!   cart uses for back-references and identity lookups.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a type-safe persistent ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>` and `Into<i32>` implementations
/// - `Display` as the bare number
///
/// # Example
///
/// ```rust
/// # use cartwheel_core::define_id;
/// define_id!(WishlistId);
/// define_id!(CustomerId);
///
/// let wishlist = WishlistId::new(1);
/// let customer = CustomerId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: WishlistId = customer;
/// # let _ = (wishlist, customer);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(CartId);
define_id!(VariantId);

/// Back-reference handle from an item to the cart holding it.
///
/// Holding a `CartRef` does not keep the cart alive; it is only good for
/// asking "does this item belong to that cart?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartRef(Uuid);

impl CartRef {
    /// Mint a fresh handle.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CartRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a single item instance.
///
/// Two items can be `equals()` (same variant) while having different keys;
/// removal and membership checks go by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(Uuid);

impl ItemKey {
    /// Mint a fresh key.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ItemKey {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_id_conversions() {
        let id = CartId::new(42);
        assert_eq!(id.as_i32(), 42);
        assert_eq!(i32::from(id), 42);
        assert_eq!(CartId::from(42), id);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_cart_id_serializes_transparently() {
        let json = serde_json::to_string(&CartId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_cart_id_deserializes_from_number() {
        let id: CartId = serde_json::from_str("12").unwrap();
        assert_eq!(id, CartId::new(12));
        assert!(serde_json::from_str::<VariantId>("\"12\"").is_err());
    }

    #[test]
    fn test_generated_handles_are_distinct() {
        assert_ne!(CartRef::generate(), CartRef::generate());
        assert_ne!(ItemKey::generate(), ItemKey::generate());
    }

    #[test]
    fn test_item_key_display_matches_uuid() {
        let uuid = Uuid::new_v4();
        let key = ItemKey::from(uuid);
        assert_eq!(key.to_string(), uuid.to_string());
        assert_eq!(key.as_uuid(), &uuid);
    }
}
