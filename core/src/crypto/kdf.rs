// ## src/crypto/kdf.rs

//! crypto/kdf.rs
//! PBKDF2 key generation for the sealing protocol.
//!
//! Design:
//! - PBKDF2-HMAC-SHA1(password, salt_text, iterations) -> key (key_bits / 8 bytes)
//! - The salt is the hex text itself, fed as UTF-8 bytes, not the decoded bytes.
//! - A key lives for exactly one seal/unseal call and is wiped on drop.

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use zeroize::Zeroizing;

use crate::crypto::random::{random_bytes, random_salt};
use crate::crypto::types::{Algorithm, AlgorithmParams, CryptoError};

/// Ephemeral key material produced by [`generate_key`].
pub struct DerivedKey {
    key: Zeroizing<Vec<u8>>,
    /// Salt text the key was derived from (travels with the sealed value).
    pub salt: String,
    /// IV to use with the key, for algorithms that take one.
    pub iv: Option<Vec<u8>>,
}

impl DerivedKey {
    #[inline]
    pub fn key(&self) -> &[u8] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"<redacted>")
            .field("salt", &self.salt)
            .field("iv", &self.iv)
            .finish()
    }
}

/// Summary: Derive a key from `password` under `params`.
/// - `salt`: reuse an existing salt (unsealing); `None` draws `params.salt_bits` fresh bits.
/// - `iv`: reuse an existing IV; `None` draws `params.iv_bits` fresh bits. Only
///   `Algorithm::Aes256Cbc` keys carry an IV.
///
/// Errors:
/// - Empty password returns CryptoError::EmptyPassword.
/// - No salt and `salt_bits == 0` returns CryptoError::MissingSalt. Both are
///   configuration defects and are never swallowed by the read paths.
pub fn generate_key(
    password: &str,
    params: &AlgorithmParams,
    salt: Option<&str>,
    iv: Option<&[u8]>,
) -> Result<DerivedKey, CryptoError> {
    if password.is_empty() {
        return Err(CryptoError::EmptyPassword);
    }

    let salt = match salt {
        Some(s) => s.to_owned(),
        None if params.salt_bits > 0 => random_salt(params.salt_bits),
        None => return Err(CryptoError::MissingSalt),
    };

    let mut key = Zeroizing::new(vec![0u8; params.key_len()]);
    pbkdf2_hmac::<Sha1>(password.as_bytes(), salt.as_bytes(), params.iterations, &mut key);

    // Only the cipher takes an IV; one passed for a MAC key is ignored.
    let iv = match params.algorithm {
        Algorithm::Aes256Cbc => Some(match iv {
            Some(given) => given.to_vec(),
            None => random_bytes(params.iv_len()),
        }),
        Algorithm::Sha256 => None,
    };

    Ok(DerivedKey { key, salt, iv })
}
