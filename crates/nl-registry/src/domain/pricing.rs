//! # Pricing Table
//!
//! Wei-per-year cost by clamped name length: 1..4 exact, 5 meaning
//! "5 or more". Owner-mutable; changes apply only to future quotes, never
//! retroactively.

use super::errors::RegistryError;
use crate::constants::{DEFAULT_PRICE_TIERS, PRICE_TIER_COUNT};
use serde::{Deserialize, Serialize};
use shared_types::Wei;

/// Per-length pricing tiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTable {
    tiers: [Wei; PRICE_TIER_COUNT],
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_PRICE_TIERS,
        }
    }
}

impl PricingTable {
    /// Build a table from explicit tiers.
    #[must_use]
    pub fn new(tiers: [Wei; PRICE_TIER_COUNT]) -> Self {
        Self { tiers }
    }

    /// Wei-per-year price for a name of the given canonical length.
    /// Length is clamped to `[1, 5]`.
    #[must_use]
    pub fn price_for(&self, length: usize) -> Wei {
        self.tiers[length.clamp(1, PRICE_TIER_COUNT) - 1]
    }

    /// Replace the price for one tier. `length` must be in `[1, 5]`;
    /// takes effect immediately for subsequent quotes.
    pub fn set_tier(&mut self, length: usize, price: Wei) -> Result<(), RegistryError> {
        if !(1..=PRICE_TIER_COUNT).contains(&length) {
            return Err(RegistryError::InvalidTierLength(length));
        }
        self.tiers[length - 1] = price;
        Ok(())
    }

    /// Total cost for a lease of `years` on a name of the given canonical
    /// length.
    pub fn quote(&self, length: usize, years: u8) -> Result<Wei, RegistryError> {
        self.price_for(length)
            .checked_mul(Wei::from(years))
            .ok_or(RegistryError::MathOverflow)
    }
}
