//! # Registry Store
//!
//! The single global ledger: name records, sub-entry records, and the
//! reservation set. An explicit object owned by the service instance;
//! there is no ambient or static state.
//!
//! Grace-aware visibility lives here: once a record's grace window has
//! fully elapsed it is logically reclaimed, and `live_record` hides it
//! from every read/write path even though the stale bytes may still sit
//! in the map until the next registration overwrites them.

use super::entities::{NameKey, Record, SubRecord};
use serde::{Deserialize, Serialize};
use shared_types::Timestamp;
use std::collections::{HashMap, HashSet};

/// Ledger state: records, sub-records, reservations.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RegistryStore {
    records: HashMap<NameKey, Record>,
    sub_records: HashMap<(NameKey, NameKey), SubRecord>,
    reserved: HashSet<NameKey>,
}

impl RegistryStore {
    /// Empty store seeded with reserved keys.
    pub fn new(reserved_seed: impl IntoIterator<Item = NameKey>) -> Self {
        Self {
            records: HashMap::new(),
            sub_records: HashMap::new(),
            reserved: reserved_seed.into_iter().collect(),
        }
    }

    /// True if the key is on the reservation list.
    #[must_use]
    pub fn is_reserved(&self, key: &NameKey) -> bool {
        self.reserved.contains(key)
    }

    /// Add a key to the reservation list.
    pub fn reserve(&mut self, key: NameKey) {
        self.reserved.insert(key);
    }

    /// Remove a key from the reservation list.
    pub fn unreserve(&mut self, key: &NameKey) {
        self.reserved.remove(key);
    }

    /// Availability rule: false if reserved; false while a record exists
    /// and its grace window has not fully elapsed; true otherwise.
    #[must_use]
    pub fn is_available(&self, key: &NameKey, now: Timestamp) -> bool {
        if self.is_reserved(key) {
            return false;
        }
        match self.records.get(key) {
            Some(record) => record.is_past_grace(now),
            None => true,
        }
    }

    /// The record for a key, treating past-grace records as absent.
    #[must_use]
    pub fn live_record(&self, key: &NameKey, now: Timestamp) -> Option<&Record> {
        self.records
            .get(key)
            .filter(|record| !record.is_past_grace(now))
    }

    /// Mutable variant of [`Self::live_record`].
    pub fn live_record_mut(&mut self, key: &NameKey, now: Timestamp) -> Option<&mut Record> {
        self.records
            .get_mut(key)
            .filter(|record| !record.is_past_grace(now))
    }

    /// Raw record access, ignoring grace (used by strict-expiry reads
    /// where `now > expires_at` already hides grace-period records).
    #[must_use]
    pub fn record(&self, key: &NameKey) -> Option<&Record> {
        self.records.get(key)
    }

    /// Write a fresh record, overwriting any residual expired data.
    pub fn put_record(&mut self, key: NameKey, record: Record) {
        self.records.insert(key, record);
    }

    /// Sub-record for a (parent, label) pair, if one was ever written.
    #[must_use]
    pub fn sub_record(&self, parent: &NameKey, label: &NameKey) -> Option<&SubRecord> {
        self.sub_records.get(&(*parent, *label))
    }

    /// Sub-record slot for a (parent, label) pair, created empty on first
    /// touch. Clearing keeps the structural entry so the reserved
    /// delegation field survives.
    pub fn sub_record_entry(&mut self, parent: NameKey, label: NameKey) -> &mut SubRecord {
        self.sub_records.entry((parent, label)).or_default()
    }

    /// Number of records physically present (including logically
    /// reclaimed ones awaiting overwrite).
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}
