//! HMAC-SHA256 signatures over the expiration field.

use data_encoding::BASE64URL_NOPAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::config::Secret;

type HmacSha256 = Hmac<Sha256>;

/// Sign `payload` and encode the digest as unpadded base64url.
pub(crate) fn compute_signature(secret: &Secret, payload: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    BASE64URL_NOPAD.encode(&mac.finalize().into_bytes())
}
