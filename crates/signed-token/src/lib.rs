//! Self-expiring, tamper-evident tokens signed with HMAC-SHA256.
//!
//! This crate provides functionality for:
//! - Minting short-lived tokens that need no server-side storage
//! - Verifying tokens with constant-time signature comparison
//! - Loading the shared secret from the environment at startup
//!
//! # Token Format
//!
//! Tokens follow the format: `{expiration_ms}.{base64url(hmac)}`
//!
//! Example: `1700000000000.hbU2bDZcT5Mp0enUjcEEAiD6lC1jCwtVIcuLXZTSoEI`
//!
//! The expiration is milliseconds since the Unix epoch; the signature is the
//! unpadded base64url HMAC-SHA256 of that decimal string.
//!
//! # Security Features
//!
//! - Constant-time signature comparison to prevent timing attacks
//! - Signature checked before the expiration is interpreted
//! - Verification is a plain `bool`, so a rejected token reveals nothing
//! - Memory zeroization of the secret on drop
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use signed_token::{SignedToken, TokenConfig};
//!
//! let config = TokenConfig::new("test-secret").unwrap();
//! let tokens = SignedToken::new(config);
//!
//! let token = tokens.mint(Duration::from_secs(60));
//! assert!(tokens.verify(&token));
//! assert!(!tokens.verify("garbage"));
//! ```

mod clock;
mod config;
mod error;
mod parse;
mod sign;
mod token;
mod verify;

// Public re-exports
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{DEFAULT_TTL, SECRET_ENV_VAR, Secret, TokenConfig};
pub use error::{ConfigError, Result};
pub use parse::{ParsedToken, parse};
pub use token::{SEPARATOR, SignedToken};
