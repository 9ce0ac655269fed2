//! Errors raised by the guarded cart operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Why a guarded mutation was refused.
///
/// The plain mutators on [`Cart`](super::Cart) never produce this; only the
/// `try_*` methods on [`CartOps`](super::CartOps) do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The cart has been locked (typically frozen for checkout).
    #[error("cart is locked")]
    Locked,

    /// The cart's expiration time has passed, or it has none.
    #[error("cart has expired")]
    Expired {
        /// The expiration time at the moment of the check.
        expires_at: Option<DateTime<Utc>>,
    },
}
