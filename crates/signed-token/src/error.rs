//! Error types for token configuration.
//!
//! Verification never produces one of these: a bad token is just `false`.

use thiserror::Error;

/// Errors raised while building a [`TokenConfig`](crate::TokenConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The environment variable holding the secret is not set
    #[error("Signing secret not configured: ${0} is not set")]
    MissingSecret(String),

    /// The secret is present but has no bytes
    #[error("Signing secret must not be empty")]
    EmptySecret,

    /// A default TTL of zero would mint tokens that are already expired
    #[error("Default TTL must be greater than zero")]
    ZeroTtl,
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
