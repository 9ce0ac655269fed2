//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_EXPIRATION_SECONDS` - Lifetime of an untouched cart (default: 10800, i.e. 3 hours)

use chrono::TimeDelta;
use thiserror::Error;

/// Default cart lifetime in seconds.
pub const DEFAULT_EXPIRATION_SECONDS: i64 = 3 * 60 * 60;

const EXPIRATION_ENV: &str = "CART_EXPIRATION_SECONDS";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid expiration window: {0}")]
    InvalidExpirationWindow(String),
}

/// Tunables for cart behavior.
///
/// The expiration window is always positive, so a freshly built or renewed
/// cart is never already expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartConfig {
    expiration_window: TimeDelta,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            expiration_window: TimeDelta::seconds(DEFAULT_EXPIRATION_SECONDS),
        }
    }
}

impl CartConfig {
    /// Create a configuration with a custom expiration window.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidExpirationWindow`] if the window is zero
    /// or negative.
    pub fn with_expiration_window(expiration_window: TimeDelta) -> Result<Self, ConfigError> {
        let expiration_window =
            check_expiration_window(expiration_window).map_err(ConfigError::InvalidExpirationWindow)?;
        Ok(Self { expiration_window })
    }

    /// How far past "now" a renewal pushes `expires_at`.
    #[must_use]
    pub const fn expiration_window(&self) -> TimeDelta {
        self.expiration_window
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CART_EXPIRATION_SECONDS` is set but is not a
    /// positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let expiration_window = match get_optional_env(EXPIRATION_ENV) {
            Some(raw) => parse_expiration_window(&raw)?,
            None => Self::default().expiration_window,
        };

        Ok(Self { expiration_window })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Reject windows that would leave a new cart already expired.
fn check_expiration_window(window: TimeDelta) -> Result<TimeDelta, String> {
    if window <= TimeDelta::zero() {
        return Err(format!("must be positive (got {}s)", window.num_seconds()));
    }
    Ok(window)
}

/// Parse a positive number of seconds into a window.
fn parse_expiration_window(raw: &str) -> Result<TimeDelta, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar(EXPIRATION_ENV.to_string(), reason);

    let seconds = raw.trim().parse::<i64>().map_err(|e| invalid(e.to_string()))?;
    let window = TimeDelta::try_seconds(seconds)
        .ok_or_else(|| invalid(format!("{seconds} seconds is out of range")))?;
    check_expiration_window(window).map_err(invalid)
}
