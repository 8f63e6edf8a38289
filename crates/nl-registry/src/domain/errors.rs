//! # Registry Errors
//!
//! Every failure surfaces a distinct, machine-matchable identifier so
//! callers can branch on cause. All failures are synchronous and atomic:
//! no partial state mutation survives an error return.

use shared_types::Wei;
use thiserror::Error;

/// Errors returned by registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    // --- Input validation ---
    /// A name or label contains a byte outside `[a-z0-9-]` after case
    /// folding. Carries the offending byte.
    #[error("invalid character in name: byte 0x{0:02X}")]
    InvalidCharacter(u8),

    /// Canonical name is shorter than the minimum length.
    #[error("name too short")]
    NameTooShort,

    /// Canonical name is longer than the maximum length.
    #[error("name too long")]
    NameTooLong,

    /// A sub-entry label normalized to the empty string.
    #[error("empty label")]
    EmptyLabel,

    /// A lease operation was requested for zero years.
    #[error("years must be non-zero")]
    ZeroYears,

    /// Transfer destination is the zero address.
    #[error("transfer to zero address")]
    TransferToZeroAddress,

    /// A display-name update does not normalize to the stored name key.
    #[error("display name does not match registered name")]
    DisplayNameMismatch,

    /// Pricing tier length outside `[1, 5]`.
    #[error("invalid tier length: {0}")]
    InvalidTierLength(usize),

    // --- Authorization ---
    /// Caller is not the current owner of the name.
    #[error("caller is not the name owner")]
    NotNameOwner,

    /// Caller is not the contract owner.
    #[error("caller is not the contract owner")]
    NotContractOwner,

    /// Coupon signature is malformed or not from the trusted signer.
    #[error("invalid coupon")]
    InvalidCoupon,

    /// Coupon deadline has passed.
    #[error("coupon expired")]
    CouponExpired,

    /// The genesis claim window has closed; coupons can no longer be
    /// redeemed at all.
    #[error("genesis window closed")]
    GenesisWindowClosed,

    // --- State conflict ---
    /// The name is on the reservation list.
    #[error("name is reserved")]
    NameReserved,

    /// The name is registered (or within its grace period).
    #[error("name is unavailable")]
    NameUnavailable,

    /// No usable record: the name was never registered or its grace
    /// period has fully elapsed.
    #[error("name not owned")]
    NameNotOwned,

    /// The lease has expired; the owner may renew during grace but cannot
    /// mutate content.
    #[error("name lease expired")]
    NameExpired,

    // --- Payment ---
    /// Attached payment does not exactly match the quote.
    #[error("incorrect payment: required {required} wei, sent {sent} wei")]
    IncorrectPayment {
        /// Exact amount the operation requires.
        required: Wei,
        /// Amount actually attached.
        sent: Wei,
    },

    /// Pricing arithmetic overflowed.
    #[error("calculation overflow")]
    MathOverflow,

    // --- Operational ---
    /// The registry is paused; mutating entry points are disabled.
    #[error("registry is paused")]
    ContractPaused,

    /// A payment-accepting entry point was re-entered before the first
    /// call completed.
    #[error("reentrant call")]
    ReentrantCall,

    /// The treasury sweep transfer failed; the tracked balance is
    /// restored.
    #[error("withdraw failed: {0}")]
    WithdrawFailed(String),
}
