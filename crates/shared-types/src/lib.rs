//! # Shared Types Crate
//!
//! Primitive types used across every NameLedger crate: caller/owner
//! identities, fixed-width hashes, monetary amounts, and timestamps.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: cross-crate primitives are defined here
//!   and nowhere else.
//! - **Explicit Identity**: there is no ambient "current caller"; every
//!   operation that needs an identity takes an [`Address`] parameter.

pub mod entities;

pub use entities::{Address, AddressParseError, Hash32, Timestamp, Wei};
