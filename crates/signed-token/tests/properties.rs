use std::sync::Arc;
use std::thread;
use std::time::Duration;

use signed_token::{ManualClock, SEPARATOR, SignedToken, TokenConfig, parse};

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

fn manual(secret: &str, now_ms: u64) -> (SignedToken<Arc<ManualClock>>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(now_ms));
    let config = TokenConfig::new(secret).unwrap();
    (SignedToken::with_clock(config, Arc::clone(&clock)), clock)
}

#[test]
fn test_fresh_tokens_verify_for_many_ttls() {
    let (tokens, _) = manual("test-secret", 1_700_000_000_000);
    for secs in [1, 2, 30, 300, 3_600, 86_400] {
        let token = tokens.mint(Duration::from_secs(secs));
        assert!(tokens.verify(&token), "ttl {secs}s should verify");
    }
}

#[test]
fn test_tokens_expire_after_ttl() {
    let (tokens, clock) = manual("test-secret", 1_700_000_000_000);
    for secs in [1, 30, 300] {
        clock.set(1_700_000_000_000);
        let token = tokens.mint(Duration::from_secs(secs));
        clock.advance(Duration::from_secs(secs) + Duration::from_millis(1));
        assert!(!tokens.verify(&token), "ttl {secs}s should have expired");
    }
}

#[test]
fn test_every_single_character_flip_in_signature_rejects() {
    let (tokens, _) = manual("test-secret", 0);
    let token = tokens.mint(Duration::from_secs(60));
    let split = token.find(SEPARATOR).unwrap() + 1;

    for pos in split..token.len() {
        let mut bytes = token.clone().into_bytes();
        let original = bytes[pos];
        let replacement = ALPHABET.iter().copied().find(|&c| c != original).unwrap();
        bytes[pos] = replacement;
        let flipped = String::from_utf8(bytes).unwrap();
        assert!(!tokens.verify(&flipped), "flip at {pos} accepted");
    }
}

#[test]
fn test_truncated_and_extended_tokens_reject() {
    let (tokens, _) = manual("test-secret", 0);
    let token = tokens.mint(Duration::from_secs(60));

    assert!(!tokens.verify(&token[..token.len() - 1]));
    assert!(!tokens.verify(&format!("{token}A")));
    assert!(!tokens.verify(&format!("{token}.")));
    assert!(!tokens.verify(&format!(" {token}")));
}

#[test]
fn test_reencoded_expiration_without_resigning_rejects() {
    let (tokens, _) = manual("test-secret", 0);
    let token = tokens.mint(Duration::from_secs(60));
    let parsed = parse(&token).unwrap();
    let later = parsed.expiration_ms().unwrap() + 3_600_000;

    let forged = format!("{later}{SEPARATOR}{}", parsed.signature);
    assert!(!tokens.verify(&forged));

    // Leading zeros encode the same number but are a different signed string.
    let padded = format!("0{}{SEPARATOR}{}", parsed.expiration, parsed.signature);
    assert!(!tokens.verify(&padded));
}

#[test]
fn test_different_secret_never_verifies() {
    let (minter, _) = manual("secret-a", 0);
    let (verifier, _) = manual("secret-b", 0);
    for secs in [1, 60, 300] {
        let token = minter.mint(Duration::from_secs(secs));
        assert!(minter.verify(&token));
        assert!(!verifier.verify(&token));
    }
}

#[test]
fn test_separate_handles_with_same_secret_interoperate() {
    let (minter, _) = manual("shared", 0);
    let (verifier, _) = manual("shared", 10);
    let token = minter.mint(Duration::from_secs(1));
    assert!(verifier.verify(&token));
}

#[test]
fn test_default_mint_with_system_clock() {
    let tokens = SignedToken::new(TokenConfig::new("test-secret").unwrap());
    let token = tokens.mint_default();
    assert!(tokens.verify(&token));
}

#[test]
fn test_concurrent_mint_and_verify() {
    let tokens = Arc::new(SignedToken::new(TokenConfig::new("test-secret").unwrap()));

    thread::scope(|scope| {
        for _ in 0..8 {
            let tokens = Arc::clone(&tokens);
            scope.spawn(move || {
                for _ in 0..200 {
                    let token = tokens.mint(Duration::from_secs(30));
                    assert!(tokens.verify(&token));
                    assert!(!tokens.verify("a.b.c"));
                }
            });
        }
    });
}
