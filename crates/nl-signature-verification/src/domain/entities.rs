//! # Signature Entities

use serde::{Deserialize, Serialize};

/// A recoverable ECDSA signature on the secp256k1 curve.
///
/// The registry never stores signatures; they arrive as call arguments on
/// the coupon claim path and are consumed immediately.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoverableSignature {
    /// R component (32 bytes).
    pub r: [u8; 32],
    /// S component (32 bytes). Must be in the lower half of the curve
    /// order (EIP-2).
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28).
    pub v: u8,
}

impl RecoverableSignature {
    /// Parse a signature from the 65-byte wire form `r || s || v`.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; 65]) -> Self {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Self { r, s, v: bytes[64] }
    }

    /// Serialize to the 65-byte wire form `r || s || v`.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }
}
