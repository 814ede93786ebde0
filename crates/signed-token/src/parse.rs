//! Token parsing.

use crate::token::SEPARATOR;

/// The two fields of a token, borrowed from the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedToken<'a> {
    /// Decimal expiration exactly as it was signed.
    pub expiration: &'a str,
    /// base64url signature supplied by the client.
    pub signature: &'a str,
}

impl<'a> ParsedToken<'a> {
    /// Interpret the expiration field as milliseconds since the epoch.
    ///
    /// Only call this once the signature has been checked.
    pub fn expiration_ms(&self) -> Option<u64> {
        if self.expiration.is_empty() || !self.expiration.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.expiration.parse::<u64>().ok()
    }
}

/// Split a token into its fields.
///
/// Returns `None` unless the token has exactly two separator-delimited parts.
/// No decoding happens here.
pub fn parse(token: &str) -> Option<ParsedToken<'_>> {
    let mut parts = token.split(SEPARATOR);
    let expiration = parts.next()?;
    let signature = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some(ParsedToken {
        expiration,
        signature,
    })
}
