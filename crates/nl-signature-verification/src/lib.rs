//! # NameLedger Signature Verification
//!
//! Stateless ECDSA (secp256k1) signature recovery used by the coupon claim
//! path. A coupon is a detached signature over a domain-separated message
//! hash; this crate recovers the signer identity so the registry can
//! compare it against its configured trusted signer.
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: S must be strictly less than
//!   half the curve order.
//! - **Scalar Range Validation**: R and S must be in `[1, n-1]`.
//! - **Constant-Time Comparisons**: range checks use the `subtle` crate.
//! - Recovery itself is delegated to `k256` as the trusted curve
//!   primitive; malformed input fails, it never panics.

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;

pub use domain::ecdsa::{address_from_pubkey, keccak256, recover_address, verify_signer};
pub use domain::entities::RecoverableSignature;
pub use domain::errors::SignatureError;
pub use domain::signing::sign_prehash;
