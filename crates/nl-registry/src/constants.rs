//! # Registry Constants
//!
//! Protocol-level constants exposed to callers: lease lengths, name length
//! bounds, the reserved-name seed list, and default pricing tiers.

use shared_types::{Timestamp, Wei};

/// One registration year, in seconds (365 days).
pub const REGISTRATION_PERIOD_SECS: Timestamp = 365 * 24 * 60 * 60;

/// Grace period after expiry during which a name can still be renewed but
/// is not yet available to others (90 days).
pub const GRACE_PERIOD_SECS: Timestamp = 90 * 24 * 60 * 60;

/// Minimum canonical name length.
pub const MIN_NAME_LEN: usize = 1;

/// Maximum canonical name length.
pub const MAX_NAME_LEN: usize = 63;

/// Number of pricing tiers: lengths 1..4 exact, 5 meaning "5 or more".
pub const PRICE_TIER_COUNT: usize = 5;

/// Protocol and brand names that can never be registered. Seeded into the
/// reservation set at construction; owner-adjustable afterwards.
pub const RESERVED_NAME_SEED: &[&str] = &["ipns", "ipfs", "nameledger", "registry", "admin"];

/// Default wei-per-year price tiers, indexed by clamped name length.
/// Short names cost more.
pub const DEFAULT_PRICE_TIERS: [Wei; PRICE_TIER_COUNT] = [
    500_000_000_000_000_000, // 1 character: 0.5 ether/year
    250_000_000_000_000_000, // 2 characters
    100_000_000_000_000_000, // 3 characters
    50_000_000_000_000_000,  // 4 characters
    10_000_000_000_000_000,  // 5+ characters
];
