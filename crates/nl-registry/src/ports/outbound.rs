//! # Outbound Ports
//!
//! Capabilities the registry consumes. Injected at construction so tests
//! can swap them (a manual clock, a mock verifier, a recording funds
//! sink) without touching the core.

use nl_signature_verification::{RecoverableSignature, SignatureError};
use shared_types::{Address, Hash32, Timestamp, Wei};
use thiserror::Error;

/// Time source. The registry never reads the system clock directly;
/// every operation compares against `now()` taken once at entry.
pub trait Clock {
    /// Current time in seconds.
    fn now(&self) -> Timestamp;
}

/// Signature recovery capability: `recover(message_hash, signature) ->
/// signer`, failing on malformed input. Injected so tests can run claim
/// flows without real curve arithmetic.
pub trait SignatureRecovery {
    /// Recover the signer address of a detached signature over a 32-byte
    /// message hash.
    fn recover(
        &self,
        message_hash: &Hash32,
        signature: &RecoverableSignature,
    ) -> Result<Address, SignatureError>;
}

/// Errors from an outbound value transfer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FundsError {
    /// The receiving side rejected or failed the transfer.
    #[error("transfer rejected: {0}")]
    Rejected(String),
}

/// Funds custody boundary: the single potentially-reentrant external
/// call. The treasury sweep runs under the reentrancy guard so a
/// callback cannot re-enter a mutating entry point mid-sweep.
pub trait FundsOutlet {
    /// Push `amount` wei to `to`.
    fn pay_out(&mut self, to: Address, amount: Wei) -> Result<(), FundsError>;
}
