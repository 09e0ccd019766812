// ## 📂 File: `src/crypto/signature.rs`

//! src/crypto/signature.rs
//! HMAC-SHA256 signatures for signed cookies.
//!
//! Wire format (before percent-encoding):
//! ```text
//! <value>.<base64(HMAC-SHA256(secret, value))>
//! ```
//! The signature is standard base64 of 32 bytes: always 44 characters,
//! always ending in a single `=`.
//!
//! Design notes:
//! - The secret's UTF-8 bytes are the HMAC key as-is (no derivation).
//! - Verification goes through the MAC's constant-time check.
//! - A stored string that cannot be a signed value is *absent*; a signed
//!   value whose signature does not verify is *invalid*. The two are
//!   deliberately kept apart.

use crate::constants::{SIGNATURE_LEN, SIGNATURE_SEPARATOR};
use crate::crypto::mac::{hmac_sha256, verify_hmac_sha256};
use crate::crypto::types::CryptoError;
use crate::utils::{base64_decode, base64_encode};

/// Outcome of reading a signed or sealed cookie that was well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verified {
    /// Authenticated; carries the recovered value.
    Valid(String),
    /// Parsed, but failed authentication (tampered or wrong secret).
    Invalid,
}

impl Verified {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verified::Valid(_))
    }

    /// The recovered value, if authentication succeeded.
    pub fn value(&self) -> Option<&str> {
        match self {
            Verified::Valid(v) => Some(v),
            Verified::Invalid => None,
        }
    }

    pub fn into_value(self) -> Option<String> {
        match self {
            Verified::Valid(v) => Some(v),
            Verified::Invalid => None,
        }
    }
}

/// base64(HMAC-SHA256(secret, value)).
pub fn sign(value: &str, secret: &str) -> Result<String, CryptoError> {
    let digest = hmac_sha256(secret.as_bytes(), value.as_bytes())?;
    Ok(base64_encode(&digest))
}

/// `value.signature`
pub fn format_signed(value: &str, secret: &str) -> Result<String, CryptoError> {
    let signature = sign(value, secret)?;
    Ok(format!("{value}{SIGNATURE_SEPARATOR}{signature}"))
}

/// Check `candidate` (base64) against the HMAC of `value`.
/// A candidate that is not valid base64 simply fails.
pub fn verify(candidate: &str, value: &str, secret: &str) -> bool {
    match base64_decode(candidate) {
        Some(tag) => verify_hmac_sha256(secret.as_bytes(), value.as_bytes(), &tag),
        None => false,
    }
}

/// Split a stored string at its **last** `.` and verify.
///
/// Returns:
/// - `None` if there is no `.` at position >= 1, or the suffix is not 44
///   characters ending in `=` (not a signed value at all).
/// - `Some(Verified::Invalid)` if the signature does not match.
/// - `Some(Verified::Valid(value))` otherwise.
pub fn parse_and_verify(stored: &str, secret: &str) -> Option<Verified> {
    let pos = match stored.rfind(SIGNATURE_SEPARATOR) {
        Some(pos) if pos >= 1 => pos,
        _ => {
            log::debug!("signed cookie dropped: no signature separator");
            return None;
        }
    };

    let (value, signature) = (&stored[..pos], &stored[pos + 1..]);
    if signature.len() != SIGNATURE_LEN || !signature.ends_with('=') {
        log::debug!("signed cookie dropped: malformed signature segment");
        return None;
    }

    if verify(signature, value, secret) {
        Some(Verified::Valid(value.to_owned()))
    } else {
        log::warn!("signed cookie failed verification");
        Some(Verified::Invalid)
    }
}
