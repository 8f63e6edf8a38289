//! # Signature Recovery Adapter

use crate::ports::outbound::SignatureRecovery;
use nl_signature_verification::{recover_address, RecoverableSignature, SignatureError};
use shared_types::{Address, Hash32};

/// Production recovery over `nl-signature-verification` (secp256k1 with
/// keccak256 address derivation).
#[derive(Clone, Copy, Debug, Default)]
pub struct EcdsaRecoveryAdapter;

impl SignatureRecovery for EcdsaRecoveryAdapter {
    fn recover(
        &self,
        message_hash: &Hash32,
        signature: &RecoverableSignature,
    ) -> Result<Address, SignatureError> {
        recover_address(message_hash, signature)
    }
}
