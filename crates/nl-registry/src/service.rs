//! # Registry Service
//!
//! The single entry surface of the ledger. Owns the store, pricing table,
//! pause flag, tracked balance, and admin configuration; every operation
//! takes an explicit `caller` identity and payable operations take an
//! explicit `payment`.
//!
//! ## Execution model
//!
//! Calls are serialized: one call fully completes before the next begins,
//! so the service itself is the lock. The one potentially-reentrant
//! boundary is the outbound funds transfer in `withdraw`; payment-
//! accepting entry points and the sweep run under an explicit reentrancy
//! guard so a transfer callback cannot nest into them.
//!
//! ## Time invariants
//!
//! | Check | Rule |
//! |-------|------|
//! | active | `now <= expires_at` (content mutation, transfer, resolution) |
//! | renewable | `now <= expires_at + GRACE_PERIOD_SECS` |
//! | available | no record, or `now > expires_at + GRACE_PERIOD_SECS` |
//! | in-grace renewal | extends from `now`, not from the stale expiry |

use crate::adapters::{EcdsaRecoveryAdapter, ManualClock, RecordingOutlet};
use crate::constants::{DEFAULT_PRICE_TIERS, REGISTRATION_PERIOD_SECS, RESERVED_NAME_SEED};
use crate::domain::codec;
use crate::domain::coupon::{CouponDomain, CouponMessage};
use crate::domain::entities::{NameKey, Record, RecordView, SubRecordView};
use crate::domain::errors::RegistryError;
use crate::domain::pricing::PricingTable;
use crate::domain::store::RegistryStore;
use crate::events::{
    ContentUpdated, NameRegistered, NameRenewed, NameTransferred, SubContentCleared,
    SubContentUpdated,
};
use crate::ports::inbound::NameResolver;
use crate::ports::outbound::{Clock, FundsOutlet, SignatureRecovery};
use nl_signature_verification::RecoverableSignature;
use shared_types::{Address, Timestamp, Wei};
use tracing::{debug, info, warn};

/// Construction-time configuration.
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// Contract owner (admin surface gate).
    pub owner: Address,
    /// Destination of treasury sweeps.
    pub treasury: Address,
    /// Trusted coupon signer.
    pub trusted_signer: Address,
    /// Identity of this registry instance (coupon domain separator).
    pub registry_address: Address,
    /// Network identity (coupon domain separator).
    pub chain_id: u64,
    /// End of the coupon claim window. Immutable after construction.
    pub genesis_window_end: Timestamp,
    /// Names seeded into the reservation set.
    pub reserved_seed: Vec<String>,
    /// Initial wei-per-year price tiers.
    pub price_tiers: [Wei; crate::constants::PRICE_TIER_COUNT],
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            owner: Address::ZERO,
            treasury: Address::ZERO,
            trusted_signer: Address::ZERO,
            registry_address: Address::ZERO,
            chain_id: 1,
            genesis_window_end: 0,
            reserved_seed: RESERVED_NAME_SEED.iter().map(ToString::to_string).collect(),
            price_tiers: DEFAULT_PRICE_TIERS,
        }
    }
}

/// Running counters, exposed via [`RegistryService::stats`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceStats {
    /// Registrations written (paid and coupon-claimed).
    pub names_registered: u64,
    /// Lease renewals.
    pub renewals: u64,
    /// Coupon claims among the registrations.
    pub coupons_claimed: u64,
}

/// The registry service.
pub struct RegistryService<C: Clock, V: SignatureRecovery, F: FundsOutlet> {
    owner: Address,
    treasury: Address,
    trusted_signer: Address,
    coupon_domain: CouponDomain,
    genesis_window_end: Timestamp,
    paused: bool,
    entered: bool,
    balance: Wei,
    pricing: PricingTable,
    store: RegistryStore,
    stats: ServiceStats,
    clock: C,
    verifier: V,
    outlet: F,
}

impl<C: Clock, V: SignatureRecovery, F: FundsOutlet> RegistryService<C, V, F> {
    /// Build a service from configuration and injected capabilities.
    /// Fails if a seeded reserved name does not normalize.
    pub fn new(
        config: RegistryConfig,
        clock: C,
        verifier: V,
        outlet: F,
    ) -> Result<Self, RegistryError> {
        let mut seed_keys = Vec::with_capacity(config.reserved_seed.len());
        for name in &config.reserved_seed {
            let canonical = codec::normalize(name)?;
            seed_keys.push(codec::name_key(&canonical));
        }

        Ok(Self {
            owner: config.owner,
            treasury: config.treasury,
            trusted_signer: config.trusted_signer,
            coupon_domain: CouponDomain {
                registry: config.registry_address,
                chain_id: config.chain_id,
            },
            genesis_window_end: config.genesis_window_end,
            paused: false,
            entered: false,
            balance: 0,
            pricing: PricingTable::new(config.price_tiers),
            store: RegistryStore::new(seed_keys),
            stats: ServiceStats::default(),
            clock,
            verifier,
            outlet,
        })
    }

    // =========================================================================
    // GUARDS
    // =========================================================================

    fn ensure_not_paused(&self) -> Result<(), RegistryError> {
        if self.paused {
            return Err(RegistryError::ContractPaused);
        }
        Ok(())
    }

    fn ensure_owner(&self, caller: Address) -> Result<(), RegistryError> {
        if caller != self.owner {
            return Err(RegistryError::NotContractOwner);
        }
        Ok(())
    }

    /// Run `f` under the reentrancy guard. The flag is cleared on every
    /// exit path, error or success.
    fn non_reentrant<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, RegistryError>,
    ) -> Result<T, RegistryError> {
        if self.entered {
            return Err(RegistryError::ReentrantCall);
        }
        self.entered = true;
        let result = f(self);
        self.entered = false;
        result
    }

    /// Reserved and availability checks shared by both registration
    /// paths.
    fn ensure_registrable(&self, key: &NameKey, now: Timestamp) -> Result<(), RegistryError> {
        if self.store.is_reserved(key) {
            return Err(RegistryError::NameReserved);
        }
        if !self.store.is_available(key, now) {
            return Err(RegistryError::NameUnavailable);
        }
        Ok(())
    }

    /// The single registration write path, shared by `register` and
    /// `claim_genesis`. All checks have passed; writes the fresh record
    /// (overwriting any residual expired data, content pointer reset).
    fn commit_registration(
        &mut self,
        caller: Address,
        raw_name: &str,
        canonical: String,
        key: NameKey,
        years: u8,
        now: Timestamp,
    ) -> NameRegistered {
        let expires_at = now + REGISTRATION_PERIOD_SECS * Timestamp::from(years);
        self.store.put_record(
            key,
            Record {
                owner: caller,
                content_pointer: String::new(),
                display_name: raw_name.to_string(),
                registered_at: now,
                expires_at,
            },
        );
        self.stats.names_registered += 1;

        info!(name = %canonical, owner = %caller, expires_at, "name registered");
        NameRegistered {
            normalized_name: canonical,
            display_name: raw_name.to_string(),
            owner: caller,
            expires_at,
        }
    }

    // =========================================================================
    // REGISTRATION LIFECYCLE
    // =========================================================================

    /// Register an available name for `years`, at the exact quoted price.
    pub fn register(
        &mut self,
        caller: Address,
        name: &str,
        years: u8,
        payment: Wei,
    ) -> Result<NameRegistered, RegistryError> {
        self.ensure_not_paused()?;
        self.non_reentrant(|svc| {
            if years == 0 {
                return Err(RegistryError::ZeroYears);
            }
            let canonical = codec::normalize(name)?;
            codec::validate_length(&canonical)?;
            let key = codec::name_key(&canonical);
            let now = svc.clock.now();

            svc.ensure_registrable(&key, now)?;

            let required = svc.pricing.quote(canonical.len(), years)?;
            if payment != required {
                return Err(RegistryError::IncorrectPayment {
                    required,
                    sent: payment,
                });
            }
            svc.balance += payment;

            Ok(svc.commit_registration(caller, name, canonical, key, years, now))
        })
    }

    /// Extend a name's lease. Permissionless: any caller may pay to renew
    /// any name (third-party gifting), so there is no ownership check on
    /// the payer.
    ///
    /// Expiry arithmetic: within grace the new lease runs from `now` (no
    /// compounding of the unpaid gap); while active it extends the
    /// existing `expires_at` (no time lost).
    pub fn renew(
        &mut self,
        caller: Address,
        name: &str,
        years: u8,
        payment: Wei,
    ) -> Result<NameRenewed, RegistryError> {
        self.ensure_not_paused()?;
        self.non_reentrant(|svc| {
            if years == 0 {
                return Err(RegistryError::ZeroYears);
            }
            let canonical = codec::normalize(name)?;
            codec::validate_length(&canonical)?;
            let key = codec::name_key(&canonical);
            let now = svc.clock.now();

            let required = svc.pricing.quote(canonical.len(), years)?;
            let record = svc
                .store
                .live_record_mut(&key, now)
                .ok_or(RegistryError::NameNotOwned)?;

            if payment != required {
                return Err(RegistryError::IncorrectPayment {
                    required,
                    sent: payment,
                });
            }

            let base = if now > record.expires_at {
                now
            } else {
                record.expires_at
            };
            record.expires_at = base + REGISTRATION_PERIOD_SECS * Timestamp::from(years);
            let owner = record.owner;
            let new_expires_at = record.expires_at;

            svc.balance += payment;
            svc.stats.renewals += 1;

            info!(name = %canonical, payer = %caller, new_expires_at, "name renewed");
            Ok(NameRenewed {
                normalized_name: canonical,
                owner,
                new_expires_at,
            })
        })
    }

    /// Redeem a signed coupon for a bootstrap-window registration.
    ///
    /// Replay protection is the ordinary availability check: redemption
    /// creates a record, and a second redemption fails `NameUnavailable`.
    /// There is no nonce table, so a coupon for a name whose lease later
    /// fully lapses can be redeemed again while its own deadline holds.
    #[allow(clippy::too_many_arguments)]
    pub fn claim_genesis(
        &mut self,
        caller: Address,
        name: &str,
        years: u8,
        price_wei: Wei,
        deadline: Timestamp,
        signature: &RecoverableSignature,
        payment: Wei,
    ) -> Result<NameRegistered, RegistryError> {
        self.ensure_not_paused()?;
        self.non_reentrant(|svc| {
            let now = svc.clock.now();
            if now > svc.genesis_window_end {
                return Err(RegistryError::GenesisWindowClosed);
            }
            if now > deadline {
                return Err(RegistryError::CouponExpired);
            }

            let canonical = codec::normalize(name)?;
            codec::validate_length(&canonical)?;
            let key = codec::name_key(&canonical);

            let message = CouponMessage {
                claimer: caller,
                name_key: key,
                years,
                price_wei,
                deadline,
            };
            let hash = message.message_hash(&svc.coupon_domain);
            let signer = svc.verifier.recover(&hash, signature).map_err(|e| {
                warn!(name = %canonical, error = %e, "coupon recovery failed");
                RegistryError::InvalidCoupon
            })?;
            if signer != svc.trusted_signer {
                warn!(name = %canonical, signer = %signer, "coupon signed by untrusted key");
                return Err(RegistryError::InvalidCoupon);
            }

            if payment != price_wei {
                return Err(RegistryError::IncorrectPayment {
                    required: price_wei,
                    sent: payment,
                });
            }

            // From here the claim funnels through the ordinary
            // registration path, availability checks included.
            if years == 0 {
                return Err(RegistryError::ZeroYears);
            }
            svc.ensure_registrable(&key, now)?;
            svc.balance += payment;
            svc.stats.coupons_claimed += 1;

            Ok(svc.commit_registration(caller, name, canonical, key, years, now))
        })
    }

    // =========================================================================
    // RECORD MUTATION
    // =========================================================================

    /// Look up a live record and check the caller controls it and the
    /// lease is current. Grace-period owners can only renew.
    fn owned_active_record_mut<'a>(
        store: &'a mut RegistryStore,
        caller: Address,
        key: &NameKey,
        now: Timestamp,
    ) -> Result<&'a mut Record, RegistryError> {
        let record = store
            .live_record_mut(key, now)
            .ok_or(RegistryError::NameNotOwned)?;
        if record.owner != caller {
            return Err(RegistryError::NotNameOwner);
        }
        if !record.is_active(now) {
            return Err(RegistryError::NameExpired);
        }
        Ok(record)
    }

    /// Set a name's content pointer. Owner-only, active lease only.
    pub fn set_content_pointer(
        &mut self,
        caller: Address,
        name: &str,
        pointer: &str,
    ) -> Result<ContentUpdated, RegistryError> {
        self.ensure_not_paused()?;
        let canonical = codec::normalize(name)?;
        let key = codec::name_key(&canonical);
        let now = self.clock.now();

        let record = Self::owned_active_record_mut(&mut self.store, caller, &key, now)?;
        record.content_pointer = pointer.to_string();

        debug!(name = %canonical, pointer, "content pointer updated");
        Ok(ContentUpdated {
            normalized_name: canonical,
            pointer: pointer.to_string(),
        })
    }

    /// Update the cosmetic display name. The new value must normalize to
    /// the stored name key.
    pub fn set_display_name(
        &mut self,
        caller: Address,
        name: &str,
        new_display: &str,
    ) -> Result<(), RegistryError> {
        self.ensure_not_paused()?;
        let canonical = codec::normalize(name)?;
        let key = codec::name_key(&canonical);
        if codec::name_key(&codec::normalize(new_display)?) != key {
            return Err(RegistryError::DisplayNameMismatch);
        }
        let now = self.clock.now();

        let record = Self::owned_active_record_mut(&mut self.store, caller, &key, now)?;
        record.display_name = new_display.to_string();
        Ok(())
    }

    /// Transfer a name to a new owner. Owner-only, active lease only,
    /// non-zero destination. Write authorization moves atomically.
    pub fn transfer(
        &mut self,
        caller: Address,
        name: &str,
        to: Address,
    ) -> Result<NameTransferred, RegistryError> {
        self.ensure_not_paused()?;
        if to.is_zero() {
            return Err(RegistryError::TransferToZeroAddress);
        }
        let canonical = codec::normalize(name)?;
        let key = codec::name_key(&canonical);
        let now = self.clock.now();

        let record = Self::owned_active_record_mut(&mut self.store, caller, &key, now)?;
        let from = record.owner;
        record.owner = to;

        info!(name = %canonical, %from, %to, "name transferred");
        Ok(NameTransferred {
            normalized_name: canonical,
            from,
            to,
        })
    }

    // =========================================================================
    // SUB-ENTRIES
    // =========================================================================

    /// Parent key plus an authorization check that the caller owns the
    /// parent and its lease is current.
    fn authorized_parent_key(
        &mut self,
        caller: Address,
        parent: &str,
        now: Timestamp,
    ) -> Result<(String, NameKey), RegistryError> {
        let canonical = codec::normalize(parent)?;
        let key = codec::name_key(&canonical);
        Self::owned_active_record_mut(&mut self.store, caller, &key, now)?;
        Ok((canonical, key))
    }

    /// Set a sub-entry's content pointer under a parent the caller owns.
    pub fn set_sub_content_pointer(
        &mut self,
        caller: Address,
        parent: &str,
        label: &str,
        pointer: &str,
    ) -> Result<SubContentUpdated, RegistryError> {
        self.ensure_not_paused()?;
        let now = self.clock.now();
        let (parent_canonical, parent_key) = self.authorized_parent_key(caller, parent, now)?;

        let label_canonical = codec::normalize(label)?;
        if label_canonical.is_empty() {
            return Err(RegistryError::EmptyLabel);
        }
        let label_key = codec::name_key(&label_canonical);

        let entry = self.store.sub_record_entry(parent_key, label_key);
        entry.content_pointer = pointer.to_string();

        debug!(parent = %parent_canonical, label = %label_canonical, pointer, "sub content set");
        Ok(SubContentUpdated {
            normalized_name: parent_canonical,
            label: label_canonical,
            pointer: pointer.to_string(),
        })
    }

    /// Clear a sub-entry's pointer, restoring fallback to the parent.
    /// Resets rather than deletes: the reserved delegation field
    /// survives.
    pub fn clear_sub_content_pointer(
        &mut self,
        caller: Address,
        parent: &str,
        label: &str,
    ) -> Result<SubContentCleared, RegistryError> {
        self.ensure_not_paused()?;
        let now = self.clock.now();
        let (parent_canonical, parent_key) = self.authorized_parent_key(caller, parent, now)?;

        let label_canonical = codec::normalize(label)?;
        if label_canonical.is_empty() {
            return Err(RegistryError::EmptyLabel);
        }
        let label_key = codec::name_key(&label_canonical);

        self.store
            .sub_record_entry(parent_key, label_key)
            .content_pointer
            .clear();

        debug!(parent = %parent_canonical, label = %label_canonical, "sub content cleared");
        Ok(SubContentCleared {
            normalized_name: parent_canonical,
            label: label_canonical,
        })
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// Full record view, or `None` if the name was never registered or
    /// its grace window has fully elapsed.
    pub fn get_record(&self, name: &str) -> Result<Option<RecordView>, RegistryError> {
        let canonical = codec::normalize(name)?;
        let key = codec::name_key(&canonical);
        let now = self.clock.now();

        Ok(self.store.live_record(&key, now).map(|record| RecordView {
            owner: record.owner,
            content_pointer: record.content_pointer.clone(),
            display_name: record.display_name.clone(),
            registered_at: record.registered_at,
            expires_at: record.expires_at,
            is_active: record.is_active(now),
        }))
    }

    /// Sub-record view. Fails `EmptyLabel` if the label normalizes to
    /// empty; an entry never written reads as defaults.
    pub fn get_sub_record(
        &self,
        parent: &str,
        label: &str,
    ) -> Result<SubRecordView, RegistryError> {
        let parent_key = codec::name_key(&codec::normalize(parent)?);
        let label_canonical = codec::normalize(label)?;
        if label_canonical.is_empty() {
            return Err(RegistryError::EmptyLabel);
        }
        let label_key = codec::name_key(&label_canonical);

        Ok(self
            .store
            .sub_record(&parent_key, &label_key)
            .map(|sub| SubRecordView {
                delegated_owner: sub.delegated_owner,
                content_pointer: sub.content_pointer.clone(),
            })
            .unwrap_or_default())
    }

    /// Current tracked contract balance (payments not yet swept).
    #[must_use]
    pub fn balance(&self) -> Wei {
        self.balance
    }

    /// Running counters.
    #[must_use]
    pub fn stats(&self) -> ServiceStats {
        self.stats.clone()
    }

    /// Whether mutating entry points are currently blocked.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    // =========================================================================
    // ADMIN SURFACE (owner-gated)
    // =========================================================================

    /// Replace one pricing tier; effective for subsequent quotes.
    pub fn set_tier(
        &mut self,
        caller: Address,
        length: usize,
        price: Wei,
    ) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        self.pricing.set_tier(length, price)
    }

    /// Point treasury sweeps at a new destination.
    pub fn set_treasury(&mut self, caller: Address, treasury: Address) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        if treasury.is_zero() {
            return Err(RegistryError::TransferToZeroAddress);
        }
        self.treasury = treasury;
        Ok(())
    }

    /// Rotate the trusted coupon signer. Immediate.
    pub fn set_signer(&mut self, caller: Address, signer: Address) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        info!(%signer, "trusted signer rotated");
        self.trusted_signer = signer;
        Ok(())
    }

    /// Hand the admin gate to a new owner.
    pub fn transfer_ownership(
        &mut self,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        if new_owner.is_zero() {
            return Err(RegistryError::TransferToZeroAddress);
        }
        self.owner = new_owner;
        Ok(())
    }

    /// Add a name to the reservation list.
    pub fn reserve(&mut self, caller: Address, name: &str) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        let key = codec::name_key(&codec::normalize(name)?);
        self.store.reserve(key);
        Ok(())
    }

    /// Remove a name from the reservation list.
    pub fn unreserve(&mut self, caller: Address, name: &str) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        let key = codec::name_key(&codec::normalize(name)?);
        self.store.unreserve(&key);
        Ok(())
    }

    /// Reserve a batch of names; fails atomically on the first name that
    /// does not normalize (no partial mutation survives, so earlier names
    /// in the batch are validated before any insert).
    pub fn reserve_batch(&mut self, caller: Address, names: &[String]) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        let mut keys = Vec::with_capacity(names.len());
        for name in names {
            keys.push(codec::name_key(&codec::normalize(name)?));
        }
        for key in keys {
            self.store.reserve(key);
        }
        Ok(())
    }

    /// Block all mutating entry points. Reads stay fully functional.
    pub fn pause(&mut self, caller: Address) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        warn!("registry paused");
        self.paused = true;
        Ok(())
    }

    /// Re-enable mutating entry points.
    pub fn unpause(&mut self, caller: Address) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        info!("registry unpaused");
        self.paused = false;
        Ok(())
    }

    /// Sweep the full tracked balance to the treasury. On transfer
    /// failure the balance is restored and `WithdrawFailed` is returned.
    pub fn withdraw(&mut self, caller: Address) -> Result<Wei, RegistryError> {
        self.ensure_owner(caller)?;
        self.non_reentrant(|svc| {
            let amount = svc.balance;
            svc.balance = 0;
            if let Err(e) = svc.outlet.pay_out(svc.treasury, amount) {
                svc.balance = amount;
                return Err(RegistryError::WithdrawFailed(e.to_string()));
            }
            info!(amount, treasury = %svc.treasury, "balance swept");
            Ok(amount)
        })
    }
}

impl<C: Clock, V: SignatureRecovery, F: FundsOutlet> NameResolver for RegistryService<C, V, F> {
    fn resolve(&self, name: &str) -> Result<String, RegistryError> {
        let key = codec::name_key(&codec::normalize(name)?);
        let now = self.clock.now();

        // Strict expiry: resolution stops at expires_at, with no grace
        // leniency (renewal eligibility is the lenient one).
        Ok(match self.store.record(&key) {
            Some(record) if record.is_active(now) => record.content_pointer.clone(),
            _ => String::new(),
        })
    }

    fn resolve_sub(&self, parent: &str, label: &str) -> Result<String, RegistryError> {
        let parent_key = codec::name_key(&codec::normalize(parent)?);
        let now = self.clock.now();

        // Fails closed: parent validity is re-checked on every call,
        // never cached across calls.
        let parent_record = match self.store.record(&parent_key) {
            Some(record) if record.is_active(now) => record,
            _ => return Ok(String::new()),
        };

        let label_canonical = codec::normalize(label)?;
        if label_canonical.is_empty() {
            return Ok(parent_record.content_pointer.clone());
        }
        let label_key = codec::name_key(&label_canonical);

        Ok(match self.store.sub_record(&parent_key, &label_key) {
            Some(sub) if !sub.content_pointer.is_empty() => sub.content_pointer.clone(),
            _ => parent_record.content_pointer.clone(),
        })
    }

    fn is_available(&self, name: &str) -> Result<bool, RegistryError> {
        let key = codec::name_key(&codec::normalize(name)?);
        Ok(self.store.is_available(&key, self.clock.now()))
    }

    fn get_price(&self, name: &str, years: u8) -> Result<Wei, RegistryError> {
        let canonical = codec::normalize(name)?;
        codec::validate_length(&canonical)?;
        self.pricing.quote(canonical.len(), years)
    }
}

/// Service wired with a manual clock, real ECDSA recovery, and a
/// recording funds outlet. Returns the clock handle so tests can move
/// time.
pub fn create_test_service(
    config: RegistryConfig,
) -> (
    RegistryService<ManualClock, EcdsaRecoveryAdapter, RecordingOutlet>,
    ManualClock,
) {
    let clock = ManualClock::starting_at(1_700_000_000);
    let service = RegistryService::new(
        config,
        clock.clone(),
        EcdsaRecoveryAdapter,
        RecordingOutlet::default(),
    )
    .expect("default reserved seed normalizes");
    (service, clock)
}
