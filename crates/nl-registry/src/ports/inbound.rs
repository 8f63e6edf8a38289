//! # Inbound Ports
//!
//! The read-only resolution surface consumers depend on. Write
//! operations live directly on `RegistryService`; resolution gets a trait
//! seam so gateways and caches can wrap the registry without seeing its
//! mutating API.

use crate::domain::errors::RegistryError;
use shared_types::Wei;

/// Read-only name resolution.
pub trait NameResolver {
    /// Content pointer for a name; empty once the lease has expired
    /// (strictly: resolution stops at `expires_at`, with no grace
    /// leniency).
    fn resolve(&self, name: &str) -> Result<String, RegistryError>;

    /// Content pointer for a sub-entry, falling back to the parent's
    /// pointer; empty if the parent is unregistered or expired.
    fn resolve_sub(&self, parent: &str, label: &str) -> Result<String, RegistryError>;

    /// Availability check: false if reserved or if a record exists whose
    /// grace window has not fully elapsed.
    fn is_available(&self, name: &str) -> Result<bool, RegistryError>;

    /// Total cost of a lease of `years` for `name` at current tiers.
    fn get_price(&self, name: &str, years: u8) -> Result<Wei, RegistryError>;
}
