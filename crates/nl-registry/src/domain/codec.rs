//! # Name Codec
//!
//! Canonical form and lookup-key derivation for names and labels. Pure
//! functions used by every other component.
//!
//! Normalization is byte-exact and locale-independent: ASCII uppercase
//! folds to lowercase, lowercase letters and digits pass through, and a
//! hyphen is allowed only strictly interior. Any other byte is fatal.
//! Names are never stored by raw string for lookup; the keccak256 of the
//! canonical form is the sole ledger key.

use super::entities::NameKey;
use super::errors::RegistryError;
use crate::constants::{MAX_NAME_LEN, MIN_NAME_LEN};
use nl_signature_verification::keccak256;

/// Normalize a raw name or label into canonical form.
///
/// Empty input is legal at this stage; callers validate length where it
/// matters (an empty label selects the parent's own pointer).
pub fn normalize(raw: &str) -> Result<String, RegistryError> {
    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(bytes.len());

    for (i, &b) in bytes.iter().enumerate() {
        let c = match b {
            b'a'..=b'z' | b'0'..=b'9' => b as char,
            b'A'..=b'Z' => (b + 32) as char,
            b'-' if i != 0 && i != bytes.len() - 1 => '-',
            _ => return Err(RegistryError::InvalidCharacter(b)),
        };
        out.push(c);
    }

    Ok(out)
}

/// Validate canonical name length against the registry bounds.
pub fn validate_length(canonical: &str) -> Result<(), RegistryError> {
    if canonical.len() < MIN_NAME_LEN {
        return Err(RegistryError::NameTooShort);
    }
    if canonical.len() > MAX_NAME_LEN {
        return Err(RegistryError::NameTooLong);
    }
    Ok(())
}

/// Derive the fixed-width lookup key from a canonical name.
#[must_use]
pub fn name_key(canonical: &str) -> NameKey {
    NameKey(keccak256(canonical.as_bytes()))
}
