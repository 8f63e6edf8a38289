//! # Signature Errors

use shared_types::Address;
use thiserror::Error;

/// Errors that can occur during signature recovery.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The signature components are out of range or malformed.
    #[error("invalid signature format")]
    InvalidFormat,

    /// Signature has a high S value (EIP-2 malleability protection).
    #[error("malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28).
    #[error("invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    /// Public key recovery failed for this (hash, signature) pair.
    #[error("failed to recover public key")]
    RecoveryFailed,

    /// Recovered signer does not match the expected signer.
    #[error("signer mismatch: expected {expected}, got {actual}")]
    SignerMismatch {
        /// The signer the caller expected.
        expected: Address,
        /// The signer actually recovered.
        actual: Address,
    },
}
