//! Domain logic for the registry: codec, entities, pricing, ledger store,
//! and coupon messages.

pub mod codec;
pub mod coupon;
pub mod entities;
pub mod errors;
pub mod pricing;
pub mod store;
