//! # NameLedger Registry
//!
//! Name registry with leased ownership, content resolution, and a
//! signed-coupon bootstrap path.
//!
//! Names are normalized to lowercase `a-z0-9-` labels and keyed by the
//! keccak256 of the canonical form, so lookups are case-insensitive and
//! the ledger never compares raw strings. Ownership is a lease: a paid
//! term of whole years, a grace window in which only renewal works, and
//! full reclamation after the grace window elapses.
//!
//! ## Layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`domain`] | Normalization, records, pricing, store, coupon hashing |
//! | [`ports`] | Inbound resolver trait, outbound clock/recovery/funds traits |
//! | [`adapters`] | System clock, manual test clock, ECDSA recovery, test outlets |
//! | [`service`] | The registry state machine and admin surface |
//! | [`events`] | Payloads returned by successful mutations |

#![warn(missing_docs)]

pub mod adapters;
pub mod constants;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

pub use domain::codec::{name_key, normalize};
pub use domain::coupon::{CouponDomain, CouponMessage};
pub use domain::entities::{NameKey, Record, RecordView, SubRecord, SubRecordView};
pub use domain::errors::RegistryError;
pub use domain::pricing::PricingTable;
pub use ports::inbound::NameResolver;
pub use ports::outbound::{Clock, FundsError, FundsOutlet, SignatureRecovery};
pub use service::{create_test_service, RegistryConfig, RegistryService, ServiceStats};

/// Crate version, for diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
