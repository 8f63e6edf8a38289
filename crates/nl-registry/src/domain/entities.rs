//! # Domain Entities
//!
//! Ledger records, sub-entry records, and the views returned by read
//! operations.

use crate::constants::GRACE_PERIOD_SECS;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use shared_types::{Address, Hash32, Timestamp};
use std::fmt;

/// Fixed-width lookup key: keccak256 of the canonical name. The sole key
/// into the ledger; raw strings are stored only as display values.
#[serde_as]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NameKey(#[serde_as(as = "Bytes")] pub Hash32);

impl fmt::Debug for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameKey(0x{})", hex::encode(&self.0[..8]))
    }
}

/// One registered name.
///
/// A record past its grace window is only logically reclaimed: storage may
/// still hold the stale data, but every read/write path treats it as
/// absent (see `RegistryStore::live_record`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Current controller; non-zero while registered.
    pub owner: Address,
    /// Opaque content pointer (e.g. a content-addressed identifier).
    /// Empty until set.
    pub content_pointer: String,
    /// Original casing/formatting of the registered name. Cosmetic only;
    /// normalizes to the same key the record is stored under.
    pub display_name: String,
    /// Registration time (seconds).
    pub registered_at: Timestamp,
    /// Lease expiry time (seconds).
    pub expires_at: Timestamp,
}

impl Record {
    /// The lease is current: content mutation, transfer, and resolution
    /// are permitted. Grace does not count as active.
    #[must_use]
    pub fn is_active(&self, now: Timestamp) -> bool {
        now <= self.expires_at
    }

    /// Past plain expiry (grace or beyond).
    #[must_use]
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now > self.expires_at
    }

    /// Expired but still inside the grace window: renewable, not
    /// re-registrable by others.
    #[must_use]
    pub fn is_in_grace(&self, now: Timestamp) -> bool {
        now > self.expires_at && !self.is_past_grace(now)
    }

    /// Grace fully elapsed: the record is logically reclaimed.
    #[must_use]
    pub fn is_past_grace(&self, now: Timestamp) -> bool {
        now > self.expires_at + GRACE_PERIOD_SECS
    }
}

/// One sub-entry under a registered parent name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubRecord {
    /// Reserved for a future delegation feature. Always zero in this
    /// version and never read for authorization.
    pub delegated_owner: Address,
    /// Opaque content pointer; empty means "no override" and resolution
    /// falls back to the parent's pointer.
    pub content_pointer: String,
}

/// Read view of a [`Record`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordView {
    /// Current controller.
    pub owner: Address,
    /// Content pointer.
    pub content_pointer: String,
    /// Original-casing display name.
    pub display_name: String,
    /// Registration time.
    pub registered_at: Timestamp,
    /// Lease expiry time.
    pub expires_at: Timestamp,
    /// `now <= expires_at`; the grace window does not count.
    pub is_active: bool,
}

/// Read view of a [`SubRecord`]. Absent entries read as all-defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubRecordView {
    /// Reserved delegation field; always zero in this version.
    pub delegated_owner: Address,
    /// Content pointer; empty means "no override".
    pub content_pointer: String,
}
