//! # Coupon Messages
//!
//! A coupon is a stateless, signer-authorized voucher permitting one
//! bootstrap-window registration without standard payment. It is never
//! stored: redemption creates an ordinary ledger record, and a second
//! redemption for the same name fails the ordinary availability check.
//! There is no separate nonce table, deliberately: a coupon for a name
//! whose lease later fully lapses can be redeemed again while its own
//! deadline holds.
//!
//! The message hash is bound to a domain separator (scheme tag + registry
//! address + chain id) so signatures cannot be replayed against another
//! registry instance or network.

use super::entities::NameKey;
use nl_signature_verification::keccak256;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash32, Timestamp, Wei};

/// Versioned scheme tag mixed into the domain separator.
pub const COUPON_SCHEME_TAG: &[u8] = b"NameLedgerCoupon-v1";

/// Binding of coupon signatures to one registry instance on one network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponDomain {
    /// Identity of this registry instance.
    pub registry: Address,
    /// Network identity.
    pub chain_id: u64,
}

impl CouponDomain {
    /// keccak256(tag || registry || chain_id), the prefix of every coupon
    /// message hash.
    #[must_use]
    pub fn separator(&self) -> Hash32 {
        let mut data = Vec::with_capacity(COUPON_SCHEME_TAG.len() + 20 + 8);
        data.extend_from_slice(COUPON_SCHEME_TAG);
        data.extend_from_slice(self.registry.as_bytes());
        data.extend_from_slice(&self.chain_id.to_be_bytes());
        keccak256(&data)
    }
}

/// The structured assertion a coupon signature covers. Reconstructed by
/// the registry at claim time with `claimer` set to the actual caller, so
/// a coupon issued to A cannot be redeemed by B.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponMessage {
    /// The only identity allowed to redeem.
    pub claimer: Address,
    /// Lookup key of the name being claimed.
    pub name_key: NameKey,
    /// Lease length in years.
    pub years: u8,
    /// Exact payment the claim must attach (zero is legal during
    /// bootstrap).
    pub price_wei: Wei,
    /// Redemption deadline (seconds).
    pub deadline: Timestamp,
}

impl CouponMessage {
    /// Domain-separated message hash: keccak256 over the separator and
    /// the fixed-width big-endian field encodings.
    #[must_use]
    pub fn message_hash(&self, domain: &CouponDomain) -> Hash32 {
        let mut data = Vec::with_capacity(32 + 20 + 32 + 1 + 16 + 8);
        data.extend_from_slice(&domain.separator());
        data.extend_from_slice(self.claimer.as_bytes());
        data.extend_from_slice(&self.name_key.0);
        data.push(self.years);
        data.extend_from_slice(&self.price_wei.to_be_bytes());
        data.extend_from_slice(&self.deadline.to_be_bytes());
        keccak256(&data)
    }
}
