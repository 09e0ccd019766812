// ## 📂 File: `src/crypto/seal.rs`

//! src/crypto/seal.rs
//! Password-based encrypt-then-MAC sealing ("iron").
//!
//! Wire format (before percent-encoding), exactly five `*`-joined fields:
//! ```text
//! encSalt(hex) * iv(b64url) * ciphertext(b64url) * hmacSalt(hex) * hmac(b64url)
//! ```
//!
//! Seal:
//! 1. key_e, iv <- PBKDF2(password, fresh encSalt); AES-256-CBC encrypt.
//! 2. mac_base = encSalt*iv*ciphertext
//! 3. key_i <- PBKDF2(password, fresh hmacSalt); hmac = HMAC-SHA256(key_i, mac_base)
//! 4. mac_base*hmacSalt*hmac
//!
//! Unseal runs the same steps backwards and checks integrity **before**
//! touching the ciphertext. A wrong password surfaces as an integrity failure.

use crate::constants::{SEAL_FIELD_COUNT, SEAL_SEPARATOR};
use crate::crypto::cipher::{decrypt_cbc, encrypt_cbc};
use crate::crypto::compare::fixed_time_eq;
use crate::crypto::kdf::generate_key;
use crate::crypto::mac::hmac_sha256;
use crate::crypto::types::{AlgorithmParams, CryptoError, SealParams};
use crate::utils::{base64url_decode, base64url_encode};

/// HMAC of `data` under a key derived from `password`.
/// Returns `(digest_b64url, salt)`.
fn hmac_with_password(
    password: &str,
    params: &AlgorithmParams,
    salt: Option<&str>,
    data: &str,
) -> Result<(String, String), CryptoError> {
    let key = generate_key(password, params, salt, None)?;
    let digest = hmac_sha256(key.key(), data.as_bytes())?;
    Ok((base64url_encode(&digest), key.salt))
}

/// Seal `value` under `password`. Two calls never produce the same output.
pub fn seal(value: &str, password: &str, params: &SealParams) -> Result<String, CryptoError> {
    let key = generate_key(password, &params.encryption, None, None)?;
    let iv = key
        .iv
        .as_deref()
        .ok_or_else(|| CryptoError::Failure("encryption parameters produced no IV".into()))?;

    let ciphertext = encrypt_cbc(key.key(), iv, value.as_bytes())?;

    let mac_base = format!(
        "{salt}{sep}{iv}{sep}{ciphertext}",
        salt = key.salt,
        iv = base64url_encode(iv),
        ciphertext = base64url_encode(&ciphertext),
        sep = SEAL_SEPARATOR
    );

    let (digest, hmac_salt) = hmac_with_password(password, &params.integrity, None, &mac_base)?;

    Ok(format!(
        "{mac_base}{sep}{hmac_salt}{sep}{digest}",
        sep = SEAL_SEPARATOR
    ))
}

/// Fields of a sealed value, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SealedParts<'a> {
    pub encryption_salt: &'a str,
    pub iv: &'a str,
    pub ciphertext: &'a str,
    pub hmac_salt: &'a str,
    pub hmac: &'a str,
}

impl<'a> SealedParts<'a> {
    /// Explicit split and arity check; anything but five fields is rejected.
    pub fn split(sealed: &'a str) -> Result<Self, CryptoError> {
        let fields: Vec<&'a str> = sealed.split(SEAL_SEPARATOR).collect();
        if fields.len() != SEAL_FIELD_COUNT {
            return Err(CryptoError::MalformedSeal { fields: fields.len() });
        }
        Ok(Self {
            encryption_salt: fields[0],
            iv: fields[1],
            ciphertext: fields[2],
            hmac_salt: fields[3],
            hmac: fields[4],
        })
    }

    /// `encSalt*iv*ciphertext`, the span covered by the HMAC.
    fn mac_base(&self, sealed: &'a str) -> &'a str {
        let len = self.encryption_salt.len() + self.iv.len() + self.ciphertext.len() + 2;
        &sealed[..len]
    }
}

/// Verify and decrypt a sealed value.
///
/// Errors:
/// - MalformedSeal if the field count is not exactly five.
/// - IntegrityCheckFailed if the HMAC does not match (tampering, wrong password).
/// - DecryptionFailed if the IV/ciphertext do not decode or decrypt to UTF-8.
/// - EmptyPassword propagates from key generation.
pub fn unseal(sealed: &str, password: &str, params: &SealParams) -> Result<String, CryptoError> {
    let parts = SealedParts::split(sealed)?;

    let mac_base = parts.mac_base(sealed);
    let (digest, _) =
        hmac_with_password(password, &params.integrity, Some(parts.hmac_salt), mac_base)?;
    if !fixed_time_eq(digest.as_bytes(), parts.hmac.as_bytes()) {
        return Err(CryptoError::IntegrityCheckFailed);
    }

    let iv = base64url_decode(parts.iv).ok_or(CryptoError::DecryptionFailed)?;
    let ciphertext = base64url_decode(parts.ciphertext).ok_or(CryptoError::DecryptionFailed)?;

    let key = generate_key(password, &params.encryption, Some(parts.encryption_salt), Some(&iv))?;
    let plaintext = decrypt_cbc(key.key(), &iv, &ciphertext).map_err(|e| match e {
        CryptoError::InvalidIvLen { .. } => CryptoError::DecryptionFailed,
        other => other,
    })?;

    String::from_utf8(plaintext).map_err(|_| CryptoError::DecryptionFailed)
}
