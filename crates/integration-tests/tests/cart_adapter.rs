//! Integration tests for storage adapters built around `Cart`.
//!
//! A storage layer keeps its own bookkeeping next to the cart and forwards
//! `CartOps`; generic code sees only the trait.

#![allow(clippy::unwrap_used)]

use cartwheel_core::{
    Cart, CartConfig, CartError, CartId, CartItem, CartOps, CartRef, ItemKey, LineItem,
};
use cartwheel_integration_tests::{init_tracing, line};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// A cart as a session store would hold it.
#[derive(Debug, Serialize, Deserialize)]
struct SessionCart {
    session_key: String,
    cart: Cart,
}

impl SessionCart {
    fn new(session_key: &str) -> Self {
        Self {
            session_key: session_key.to_string(),
            cart: Cart::new(),
        }
    }

    /// What a storage layer does on first save.
    fn save(&mut self, id: i32) {
        if self.cart.id().is_none() {
            self.cart.set_id(Some(CartId::new(id)));
        }
    }
}

impl CartOps for SessionCart {
    type Item = LineItem;

    fn handle(&self) -> CartRef {
        self.cart.handle()
    }

    fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    fn add_item(&mut self, item: LineItem) {
        self.cart.add_item(item);
    }

    fn remove_item(&mut self, key: ItemKey) -> Option<LineItem> {
        self.cart.remove_item(key)
    }

    fn has_item(&self, key: ItemKey) -> bool {
        self.cart.has_item(key)
    }

    fn clear_items(&mut self) -> Vec<LineItem> {
        self.cart.clear_items()
    }

    fn is_locked(&self) -> bool {
        self.cart.is_locked()
    }

    fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.cart.expires_at()
    }

    fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.cart.is_expired_at(now)
    }
}

/// Reaping policy a storage layer might apply.
fn should_reap<C: CartOps>(cart: &C, now: DateTime<Utc>) -> bool {
    !cart.is_locked() && cart.is_expired_at(now)
}

/// Add every item through the guarded path, stopping at the first refusal.
fn add_all<C: CartOps>(cart: &mut C, items: Vec<C::Item>) -> Result<usize, CartError> {
    let mut added = 0;
    for item in items {
        cart.try_add_item(item)?;
        added += 1;
    }
    Ok(added)
}

// =============================================================================
// Forwarding Tests
// =============================================================================

#[test]
fn test_adapter_forwards_merge_semantics() {
    init_tracing();
    let mut session = SessionCart::new("sess-1");

    let added = add_all(&mut session, vec![line(1, 2), line(1, 3), line(2, 1)]).unwrap();

    assert_eq!(added, 3);
    assert_eq!(session.count_items(), 2);
    assert_eq!(session.items().first().unwrap().quantity().get(), 5);
}

#[test]
fn test_adapter_back_references_use_inner_handle() {
    init_tracing();
    let mut session = SessionCart::new("sess-1");
    let item = line(1, 1);
    let key = item.key();

    session.add_item(item);

    assert!(session.has_item(key));
    assert_eq!(
        session.items().first().unwrap().cart(),
        Some(CartOps::handle(&session))
    );
}

#[test]
fn test_adapter_guard_refuses_locked_cart() {
    init_tracing();
    let mut session = SessionCart::new("sess-1");
    session.cart.set_locked(true);

    let result = add_all(&mut session, vec![line(1, 1)]);

    assert_eq!(result, Err(CartError::Locked));
    assert!(CartOps::is_empty(&session));
}

// =============================================================================
// Storage Policy Tests
// =============================================================================

#[test]
fn test_reaping_policy() {
    init_tracing();
    let now = Utc::now();
    let later = now + TimeDelta::hours(5);
    let mut session = SessionCart::new("sess-1");

    assert!(!should_reap(&session, now));
    assert!(should_reap(&session, later));

    // Locked carts are frozen for checkout and kept.
    session.cart.set_locked(true);
    assert!(!should_reap(&session, later));
}

#[test]
fn test_id_assigned_once_on_first_save() {
    init_tracing();
    let mut session = SessionCart::new("sess-1");
    assert_eq!(session.cart.id(), None);

    session.save(41);
    session.save(99);

    assert_eq!(session.cart.id(), Some(CartId::new(41)));
}

#[test]
fn test_snapshot_roundtrip_through_session_store() {
    init_tracing();
    let mut session = SessionCart::new("sess-9");
    session.add_item(line(3, 2));
    session.save(7);

    let json = serde_json::to_string(&session).unwrap();
    let mut restored: SessionCart = serde_json::from_str(&json).unwrap();
    restored
        .cart
        .set_config(CartConfig::with_expiration_window(TimeDelta::minutes(20)).unwrap());

    assert_eq!(restored.session_key, "sess-9");
    assert_eq!(restored.cart.id(), Some(CartId::new(7)));
    assert_eq!(CartOps::handle(&restored), CartOps::handle(&session));

    // Restored items still belong to the restored cart and keep merging.
    restored.add_item(line(3, 1));
    assert_eq!(restored.count_items(), 1);
    assert_eq!(restored.items().first().unwrap().quantity().get(), 3);
    assert_eq!(
        restored.items().first().unwrap().cart(),
        Some(CartOps::handle(&restored))
    );

    let now = Utc::now();
    restored.cart.increment_expires_at_from(now);
    assert_eq!(
        restored.cart.expires_at(),
        Some(now + TimeDelta::minutes(20))
    );
}
