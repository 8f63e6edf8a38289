//! # Coupon Claim Flows
//!
//! Claims exercised with real secp256k1 signing: an issuer key signs
//! coupon hashes with `nl-signature-verification`, and the registry
//! recovers and checks the signer through its production adapter.

#[cfg(test)]
mod tests {
    use k256::ecdsa::SigningKey;
    use nl_registry::{
        create_test_service, name_key, normalize, Clock, CouponDomain, CouponMessage, NameResolver,
        RegistryConfig, RegistryError,
    };
    use nl_signature_verification::{
        address_from_pubkey, sign_prehash, RecoverableSignature,
    };
    use shared_types::{Address, Timestamp, Wei};

    const OWNER: Address = Address([0xA0; 20]);
    const ALICE: Address = Address([0x01; 20]);
    const BOB: Address = Address([0x02; 20]);
    const REGISTRY: Address = Address([0xD0; 20]);

    const WINDOW_END: Timestamp = 1_800_000_000;

    fn issuer_key() -> SigningKey {
        SigningKey::from_slice(&[0x42; 32]).unwrap()
    }

    fn config() -> RegistryConfig {
        RegistryConfig {
            owner: OWNER,
            treasury: Address([0xB0; 20]),
            trusted_signer: address_from_pubkey(issuer_key().verifying_key()),
            registry_address: REGISTRY,
            chain_id: 7,
            genesis_window_end: WINDOW_END,
            price_tiers: [500, 400, 300, 200, 100],
            ..RegistryConfig::default()
        }
    }

    fn coupon_domain() -> CouponDomain {
        CouponDomain {
            registry: REGISTRY,
            chain_id: 7,
        }
    }

    /// Issue a coupon the way the off-chain signer would.
    fn issue(
        key: &SigningKey,
        claimer: Address,
        name: &str,
        years: u8,
        price_wei: Wei,
        deadline: Timestamp,
    ) -> RecoverableSignature {
        let message = CouponMessage {
            claimer,
            name_key: name_key(&normalize(name).unwrap()),
            years,
            price_wei,
            deadline,
        };
        sign_prehash(key, &message.message_hash(&coupon_domain()))
    }

    #[test]
    fn test_free_claim_succeeds() {
        crate::init_tracing();
        let (mut svc, _) = create_test_service(config());
        let sig = issue(&issuer_key(), ALICE, "founder", 2, 0, WINDOW_END);

        let reg = svc
            .claim_genesis(ALICE, "founder", 2, 0, WINDOW_END, &sig, 0)
            .unwrap();
        assert_eq!(reg.owner, ALICE);
        assert_eq!(reg.normalized_name, "founder");
        assert_eq!(svc.balance(), 0);
        assert_eq!(svc.stats().coupons_claimed, 1);
        assert!(!svc.is_available("founder").unwrap());
    }

    #[test]
    fn test_discounted_claim_collects_coupon_price() {
        let (mut svc, _) = create_test_service(config());
        // Coupon price far below the 100-per-year list price.
        let sig = issue(&issuer_key(), ALICE, "discounted", 1, 5, WINDOW_END);

        svc.claim_genesis(ALICE, "discounted", 1, 5, WINDOW_END, &sig, 5)
            .unwrap();
        assert_eq!(svc.balance(), 5);

        let (mut svc, _) = create_test_service(config());
        let sig = issue(&issuer_key(), ALICE, "discounted", 1, 5, WINDOW_END);
        assert_eq!(
            svc.claim_genesis(ALICE, "discounted", 1, 5, WINDOW_END, &sig, 6)
                .unwrap_err(),
            RegistryError::IncorrectPayment {
                required: 5,
                sent: 6
            }
        );
    }

    #[test]
    fn test_coupon_binds_claimer() {
        let (mut svc, _) = create_test_service(config());
        let sig = issue(&issuer_key(), ALICE, "bound", 1, 0, WINDOW_END);

        // Bob presents Alice's coupon: the registry rebuilds the message
        // with Bob as claimer and recovery lands on the wrong address.
        assert_eq!(
            svc.claim_genesis(BOB, "bound", 1, 0, WINDOW_END, &sig, 0)
                .unwrap_err(),
            RegistryError::InvalidCoupon
        );
        svc.claim_genesis(ALICE, "bound", 1, 0, WINDOW_END, &sig, 0)
            .unwrap();
    }

    #[test]
    fn test_coupon_binds_every_field() {
        let (mut svc, _) = create_test_service(config());
        let sig = issue(&issuer_key(), ALICE, "field", 1, 0, WINDOW_END);

        // Different name.
        assert_eq!(
            svc.claim_genesis(ALICE, "other", 1, 0, WINDOW_END, &sig, 0)
                .unwrap_err(),
            RegistryError::InvalidCoupon
        );
        // Inflated years.
        assert_eq!(
            svc.claim_genesis(ALICE, "field", 3, 0, WINDOW_END, &sig, 0)
                .unwrap_err(),
            RegistryError::InvalidCoupon
        );
        // Altered deadline.
        assert_eq!(
            svc.claim_genesis(ALICE, "field", 1, 0, WINDOW_END - 1, &sig, 0)
                .unwrap_err(),
            RegistryError::InvalidCoupon
        );
    }

    #[test]
    fn test_untrusted_signer_rejected() {
        let (mut svc, _) = create_test_service(config());
        let rogue = SigningKey::from_slice(&[0x77; 32]).unwrap();
        let sig = issue(&rogue, ALICE, "rogue", 1, 0, WINDOW_END);

        assert_eq!(
            svc.claim_genesis(ALICE, "rogue", 1, 0, WINDOW_END, &sig, 0)
                .unwrap_err(),
            RegistryError::InvalidCoupon
        );
    }

    #[test]
    fn test_signer_rotation_applies_immediately() {
        let (mut svc, _) = create_test_service(config());
        let new_key = SigningKey::from_slice(&[0x77; 32]).unwrap();
        svc.set_signer(OWNER, address_from_pubkey(new_key.verifying_key()))
            .unwrap();

        // Old issuer's coupons stop validating; new issuer's work.
        let old_sig = issue(&issuer_key(), ALICE, "rotated", 1, 0, WINDOW_END);
        assert_eq!(
            svc.claim_genesis(ALICE, "rotated", 1, 0, WINDOW_END, &old_sig, 0)
                .unwrap_err(),
            RegistryError::InvalidCoupon
        );
        let new_sig = issue(&new_key, ALICE, "rotated", 1, 0, WINDOW_END);
        svc.claim_genesis(ALICE, "rotated", 1, 0, WINDOW_END, &new_sig, 0)
            .unwrap();
    }

    #[test]
    fn test_expired_coupon_rejected() {
        let (mut svc, clock) = create_test_service(config());
        let deadline = clock.now() + 100;
        let sig = issue(&issuer_key(), ALICE, "late", 1, 0, deadline);

        clock.advance(101);
        assert_eq!(
            svc.claim_genesis(ALICE, "late", 1, 0, deadline, &sig, 0)
                .unwrap_err(),
            RegistryError::CouponExpired
        );
    }

    #[test]
    fn test_window_close_disables_claims() {
        let (mut svc, clock) = create_test_service(config());
        clock.set(WINDOW_END + 1);

        // Even a coupon whose own deadline is still ahead fails once the
        // window closes; paid registration is unaffected.
        let sig = issue(&issuer_key(), ALICE, "tardy", 1, 0, WINDOW_END + 100);
        assert_eq!(
            svc.claim_genesis(ALICE, "tardy", 1, 0, WINDOW_END + 100, &sig, 0)
                .unwrap_err(),
            RegistryError::GenesisWindowClosed
        );
        svc.register(ALICE, "tardy", 1, 100).unwrap();
    }

    #[test]
    fn test_claim_respects_availability_and_reservations() {
        let (mut svc, _) = create_test_service(config());
        svc.register(BOB, "taken", 1, 100).unwrap();

        let sig = issue(&issuer_key(), ALICE, "taken", 1, 0, WINDOW_END);
        assert_eq!(
            svc.claim_genesis(ALICE, "taken", 1, 0, WINDOW_END, &sig, 0)
                .unwrap_err(),
            RegistryError::NameUnavailable
        );

        let sig = issue(&issuer_key(), ALICE, "ipns", 1, 0, WINDOW_END);
        assert_eq!(
            svc.claim_genesis(ALICE, "ipns", 1, 0, WINDOW_END, &sig, 0)
                .unwrap_err(),
            RegistryError::NameReserved
        );
    }

    #[test]
    fn test_replay_blocked_by_availability() {
        let (mut svc, _) = create_test_service(config());
        let sig = issue(&issuer_key(), ALICE, "once", 1, 0, WINDOW_END);

        svc.claim_genesis(ALICE, "once", 1, 0, WINDOW_END, &sig, 0)
            .unwrap();
        assert_eq!(
            svc.claim_genesis(ALICE, "once", 1, 0, WINDOW_END, &sig, 0)
                .unwrap_err(),
            RegistryError::NameUnavailable
        );
    }

    #[test]
    fn test_claimed_name_behaves_like_paid_registration() {
        let (mut svc, _) = create_test_service(config());
        let sig = issue(&issuer_key(), ALICE, "Claimed", 1, 0, WINDOW_END);

        let reg = svc
            .claim_genesis(ALICE, "Claimed", 1, 0, WINDOW_END, &sig, 0)
            .unwrap();
        assert_eq!(reg.display_name, "Claimed");

        // Full owner powers: content, sub-entries, transfer, renewal.
        svc.set_content_pointer(ALICE, "claimed", "ptr").unwrap();
        assert_eq!(svc.resolve("claimed").unwrap(), "ptr");
        svc.renew(ALICE, "claimed", 1, 100).unwrap();
        svc.transfer(ALICE, "claimed", BOB).unwrap();
    }

    #[test]
    fn test_tampered_signature_rejected_not_panicking() {
        let (mut svc, _) = create_test_service(config());
        let mut sig = issue(&issuer_key(), ALICE, "tamper", 1, 0, WINDOW_END);
        sig.v = 99;

        assert_eq!(
            svc.claim_genesis(ALICE, "tamper", 1, 0, WINDOW_END, &sig, 0)
                .unwrap_err(),
            RegistryError::InvalidCoupon
        );
    }
}
