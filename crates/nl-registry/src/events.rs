//! # Registry Events
//!
//! Payload structs returned by every mutating operation. In the
//! serialized call model the return value is the emission point; the
//! service also logs each event via `tracing`.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Timestamp};

/// A name was registered (by payment or by coupon claim).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRegistered {
    /// Canonical name.
    pub normalized_name: String,
    /// Original-casing input, stored as the display value.
    pub display_name: String,
    /// New owner.
    pub owner: Address,
    /// Lease expiry.
    pub expires_at: Timestamp,
}

/// A lease was extended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRenewed {
    /// Canonical name.
    pub normalized_name: String,
    /// Current owner (not necessarily the payer; renewal is
    /// permissionless).
    pub owner: Address,
    /// New lease expiry.
    pub new_expires_at: Timestamp,
}

/// A name's content pointer was updated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentUpdated {
    /// Canonical name.
    pub normalized_name: String,
    /// New pointer value.
    pub pointer: String,
}

/// A sub-entry's content pointer was set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubContentUpdated {
    /// Canonical parent name.
    pub normalized_name: String,
    /// Canonical label.
    pub label: String,
    /// New pointer value.
    pub pointer: String,
}

/// A sub-entry's content pointer was cleared (fallback to parent
/// restored).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubContentCleared {
    /// Canonical parent name.
    pub normalized_name: String,
    /// Canonical label.
    pub label: String,
}

/// A name changed owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTransferred {
    /// Canonical name.
    pub normalized_name: String,
    /// Previous owner.
    pub from: Address,
    /// New owner.
    pub to: Address,
}
