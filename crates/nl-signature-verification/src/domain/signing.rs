//! # Coupon Signing
//!
//! Issuer-side helper: produce a recoverable, low-S-normalized signature
//! over a prehash. The registry itself never signs; this exists for the
//! off-chain coupon issuer and for tests.

use super::ecdsa::{invert_s, is_low_s};
use super::entities::RecoverableSignature;
use k256::ecdsa::SigningKey;
use shared_types::Hash32;

/// Sign a 32-byte prehash, normalizing to low-S (EIP-2) and adjusting the
/// recovery ID to match.
pub fn sign_prehash(signing_key: &SigningKey, message_hash: &Hash32) -> RecoverableSignature {
    // RFC 6979 deterministic nonce; signing a fixed-width prehash cannot
    // fail with a valid key.
    let (sig, recid) = signing_key
        .sign_prehash_recoverable(message_hash)
        .expect("prehash signing is infallible for a valid key");

    let sig_bytes = sig.to_bytes();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&sig_bytes[..32]);
    s.copy_from_slice(&sig_bytes[32..]);

    if is_low_s(&s) {
        RecoverableSignature {
            r,
            s,
            v: recid.to_byte() + 27,
        }
    } else {
        // Flipping S to its low twin flips the recovered point's parity.
        let v = if recid.to_byte() == 0 { 28 } else { 27 };
        RecoverableSignature {
            r,
            s: invert_s(&s),
            v,
        }
    }
}

/// Generate a fresh secp256k1 keypair. Test support for coupon flows.
#[cfg(test)]
pub fn generate_keypair() -> (SigningKey, k256::ecdsa::VerifyingKey) {
    let signing_key = SigningKey::random(&mut rand::thread_rng());
    let verifying_key = *signing_key.verifying_key();
    (signing_key, verifying_key)
}
