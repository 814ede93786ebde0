//! Token minting.

use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::config::TokenConfig;
use crate::sign::compute_signature;

/// Joins expiration and signature. Never part of the base64url alphabet.
pub const SEPARATOR: char = '.';

/// Handle that mints and verifies tokens for one secret.
///
/// Holds no mutable state; share it freely between threads.
#[derive(Debug, Clone)]
pub struct SignedToken<C = SystemClock> {
    pub(crate) config: TokenConfig,
    pub(crate) clock: C,
}

impl SignedToken<SystemClock> {
    /// Create a handle driven by the wall clock.
    pub fn new(config: TokenConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> SignedToken<C> {
    /// Create a handle with a custom time source.
    pub fn with_clock(config: TokenConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Configuration this handle signs with.
    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Mint a token valid for `ttl` from now.
    ///
    /// Format: `{expiration_ms}.{base64url(HMAC-SHA256(secret, expiration_ms))}`
    pub fn mint(&self, ttl: Duration) -> String {
        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        let expiration = self.clock.now_ms().saturating_add(ttl_ms).to_string();
        let signature = compute_signature(self.config.secret(), &expiration);
        format!("{expiration}{SEPARATOR}{signature}")
    }

    /// Mint a token valid for the configured default TTL (300 seconds
    /// unless overridden).
    pub fn mint_default(&self) -> String {
        self.mint(self.config.default_ttl())
    }
}
