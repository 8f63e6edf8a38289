//! # Lease Lifecycle Flows
//!
//! End-to-end walks through the registration state machine: paid
//! registration, renewal through grace, reclamation, transfer, and the
//! admin surface (pause, pricing, treasury sweeps).

#[cfg(test)]
mod tests {
    use nl_registry::adapters::{EcdsaRecoveryAdapter, ManualClock, RejectingOutlet};
    use nl_registry::constants::{GRACE_PERIOD_SECS, REGISTRATION_PERIOD_SECS};
    use nl_registry::{
        create_test_service, Clock, NameResolver, RegistryConfig, RegistryError, RegistryService,
    };
    use shared_types::Address;

    const OWNER: Address = Address([0xA0; 20]);
    const TREASURY: Address = Address([0xB0; 20]);
    const ALICE: Address = Address([0x01; 20]);
    const BOB: Address = Address([0x02; 20]);

    fn config() -> RegistryConfig {
        RegistryConfig {
            owner: OWNER,
            treasury: TREASURY,
            trusted_signer: Address([0xC0; 20]),
            registry_address: Address([0xD0; 20]),
            chain_id: 1,
            genesis_window_end: u64::MAX,
            price_tiers: [500, 400, 300, 200, 100],
            ..RegistryConfig::default()
        }
    }

    #[test]
    fn test_full_lease_lifecycle() {
        crate::init_tracing();
        let (mut svc, clock) = create_test_service(config());

        // Quote, register with the exact amount, resolve.
        let price = svc.get_price("Wallet", 1).unwrap();
        assert_eq!(price, 100);
        let reg = svc.register(ALICE, "Wallet", 1, price).unwrap();
        assert_eq!(reg.normalized_name, "wallet");
        svc.set_content_pointer(ALICE, "wallet", "bafy-site-v1")
            .unwrap();
        assert_eq!(svc.resolve("WALLET").unwrap(), "bafy-site-v1");

        // Expiry: resolution stops, renewal still works through grace.
        clock.set(reg.expires_at + GRACE_PERIOD_SECS);
        assert_eq!(svc.resolve("wallet").unwrap(), "");
        assert!(!svc.is_available("wallet").unwrap());
        let renewed = svc.renew(ALICE, "wallet", 1, 100).unwrap();
        assert_eq!(
            renewed.new_expires_at,
            clock.now() + REGISTRATION_PERIOD_SECS
        );
        assert_eq!(svc.resolve("wallet").unwrap(), "bafy-site-v1");

        // Let it fully lapse: reclaimed, re-registered fresh by Bob.
        clock.set(renewed.new_expires_at + GRACE_PERIOD_SECS + 1);
        assert!(svc.is_available("wallet").unwrap());
        assert_eq!(
            svc.renew(ALICE, "wallet", 1, 100).unwrap_err(),
            RegistryError::NameNotOwned
        );
        svc.register(BOB, "wallet", 1, 100).unwrap();
        let view = svc.get_record("wallet").unwrap().unwrap();
        assert_eq!(view.owner, BOB);
        assert_eq!(view.content_pointer, "");

        assert_eq!(svc.stats().names_registered, 2);
        assert_eq!(svc.stats().renewals, 1);
    }

    #[test]
    fn test_third_party_renewal_keeps_owner() {
        let (mut svc, _) = create_test_service(config());
        svc.register(ALICE, "gift", 1, 200).unwrap();

        // Bob pays; Alice keeps the name and all write authority.
        let renewed = svc.renew(BOB, "gift", 1, 200).unwrap();
        assert_eq!(renewed.owner, ALICE);
        assert_eq!(
            svc.set_content_pointer(BOB, "gift", "x").unwrap_err(),
            RegistryError::NotNameOwner
        );
        svc.set_content_pointer(ALICE, "gift", "x").unwrap();
    }

    #[test]
    fn test_transfer_then_expiry_permissions() {
        let (mut svc, clock) = create_test_service(config());
        let reg = svc.register(ALICE, "handoff", 1, 100).unwrap();
        svc.transfer(ALICE, "handoff", BOB).unwrap();

        clock.set(reg.expires_at + 1);
        // In grace the new owner can renew but not mutate or re-transfer.
        assert_eq!(
            svc.transfer(BOB, "handoff", ALICE).unwrap_err(),
            RegistryError::NameExpired
        );
        svc.renew(BOB, "handoff", 1, 100).unwrap();
        svc.transfer(BOB, "handoff", ALICE).unwrap();
    }

    #[test]
    fn test_pricing_tiers_by_length() {
        let (svc, _) = create_test_service(config());
        assert_eq!(svc.get_price("a", 1).unwrap(), 500);
        assert_eq!(svc.get_price("ab", 1).unwrap(), 400);
        assert_eq!(svc.get_price("abc", 1).unwrap(), 300);
        assert_eq!(svc.get_price("abcd", 1).unwrap(), 200);
        assert_eq!(svc.get_price("abcde", 1).unwrap(), 100);
        // Five-or-more share the last tier.
        assert_eq!(svc.get_price(&"a".repeat(63), 1).unwrap(), 100);
        assert_eq!(svc.get_price("abc", 3).unwrap(), 900);
    }

    #[test]
    fn test_quote_counts_canonical_length() {
        let (svc, _) = create_test_service(config());
        // Mixed case folds before the tier lookup.
        assert_eq!(
            svc.get_price("AB", 1).unwrap(),
            svc.get_price("ab", 1).unwrap()
        );
    }

    #[test]
    fn test_withdraw_sweeps_to_treasury() {
        let (mut svc, _) = create_test_service(config());
        svc.register(ALICE, "one", 1, 300).unwrap();
        svc.register(BOB, "two", 2, 600).unwrap();
        assert_eq!(svc.balance(), 900);

        let swept = svc.withdraw(OWNER).unwrap();
        assert_eq!(swept, 900);
        assert_eq!(svc.balance(), 0);
        // Second sweep is a harmless zero transfer.
        assert_eq!(svc.withdraw(OWNER).unwrap(), 0);
    }

    #[test]
    fn test_withdraw_failure_restores_balance() {
        let clock = ManualClock::starting_at(1_700_000_000);
        let mut svc = RegistryService::new(
            config(),
            clock.clone(),
            EcdsaRecoveryAdapter,
            RejectingOutlet,
        )
        .unwrap();
        svc.register(ALICE, "one", 1, 300).unwrap();

        let err = svc.withdraw(OWNER).unwrap_err();
        assert!(matches!(err, RegistryError::WithdrawFailed(_)));
        assert_eq!(svc.balance(), 300);
    }

    #[test]
    fn test_admin_is_not_pause_blocked() {
        let (mut svc, _) = create_test_service(config());
        svc.register(ALICE, "one", 1, 300).unwrap();
        svc.pause(OWNER).unwrap();

        // The admin surface keeps working while user writes are blocked.
        svc.set_tier(OWNER, 1, 999).unwrap();
        svc.set_treasury(OWNER, Address([0xB1; 20])).unwrap();
        svc.reserve(OWNER, "held").unwrap();
        assert_eq!(svc.withdraw(OWNER).unwrap(), 300);
        assert_eq!(
            svc.register(BOB, "two", 1, 400).unwrap_err(),
            RegistryError::ContractPaused
        );

        svc.unpause(OWNER).unwrap();
        svc.register(BOB, "two", 1, 400).unwrap();
    }

    #[test]
    fn test_default_reserved_seed_blocks_registration() {
        let (mut svc, _) = create_test_service(config());
        for name in ["ipns", "IPFS", "nameledger", "registry", "admin"] {
            assert_eq!(
                svc.register(ALICE, name, 1, 1_000_000).unwrap_err(),
                RegistryError::NameReserved,
                "{name} should be reserved"
            );
        }
    }
}
