//! Configuration for token minting and verification.

use std::fmt;
use std::time::Duration;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{ConfigError, Result};

/// Environment variable read by [`TokenConfig::from_env`].
pub const SECRET_ENV_VAR: &str = "SIGNED_TOKENS_SECRET";

/// Lifetime given to tokens when the caller does not pick one.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Shared HMAC key. Wiped from memory on drop and never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Secret(Vec<u8>);

impl Secret {
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret([REDACTED])")
    }
}

/// Configuration shared by every process that mints or verifies tokens
/// of the same family.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    secret: Secret,
    default_ttl: Duration,
}

impl TokenConfig {
    /// Create a config from raw secret bytes.
    ///
    /// An empty secret is rejected here so that a misconfigured process
    /// fails at startup rather than minting tokens anyone could forge.
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        Ok(Self {
            secret: Secret(secret),
            default_ttl: DEFAULT_TTL,
        })
    }

    /// Read the secret from `SIGNED_TOKENS_SECRET`.
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(SECRET_ENV_VAR)
    }

    /// Read the secret from the named environment variable.
    pub fn from_env_var(name: &str) -> Result<Self> {
        let value =
            std::env::var_os(name).ok_or_else(|| ConfigError::MissingSecret(name.to_string()))?;
        Self::new(value.into_encoded_bytes())
    }

    /// Override the default TTL.
    pub fn with_default_ttl(mut self, ttl: Duration) -> Result<Self> {
        if ttl.is_zero() {
            return Err(ConfigError::ZeroTtl);
        }
        self.default_ttl = ttl;
        Ok(self)
    }

    /// TTL used by `mint_default`. Only [`with_default_ttl`](Self::with_default_ttl)
    /// can change it, so it is never zero.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    pub(crate) fn secret(&self) -> &Secret {
        &self.secret
    }
}
