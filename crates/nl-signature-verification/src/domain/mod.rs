//! Domain logic for signature recovery.

pub mod ecdsa;
pub mod entities;
pub mod errors;
pub mod signing;
