//! Token verification with constant-time comparison.

use subtle::ConstantTimeEq;

use crate::clock::Clock;
use crate::parse::parse;
use crate::sign::compute_signature;
use crate::token::SignedToken;

impl<C: Clock> SignedToken<C> {
    /// Check that `token` was minted with this secret and has not expired.
    ///
    /// This function:
    /// 1. Splits the token into expiration and signature
    /// 2. Recomputes the signature over the expiration string
    /// 3. Compares both signatures in constant time
    /// 4. Only then parses the expiration and checks it is in the future
    ///
    /// Every failure yields `false`; callers get no hint about which step
    /// rejected the token.
    pub fn verify(&self, token: &str) -> bool {
        let Some(parsed) = parse(token) else {
            log::trace!("token rejected: malformed");
            return false;
        };

        let expected = compute_signature(self.config.secret(), parsed.expiration);
        if !signatures_equal(expected.as_bytes(), parsed.signature.as_bytes()) {
            log::trace!("token rejected: signature mismatch");
            return false;
        }

        let Some(expiration) = parsed.expiration_ms() else {
            log::trace!("token rejected: unreadable expiration");
            return false;
        };

        if expiration <= self.clock.now_ms() {
            log::trace!("token rejected: expired");
            return false;
        }

        true
    }
}

/// Constant-time comparison of two encoded signatures.
///
/// Slices of different length compare unequal without inspecting contents.
fn signatures_equal(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
