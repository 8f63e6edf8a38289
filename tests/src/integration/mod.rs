//! Cross-crate integration flows.

pub mod coupon_claims;
pub mod lifecycle;
