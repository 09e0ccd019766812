//! HMAC-SHA256 primitive.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::crypto::types::{CryptoError, MAC_LEN_32};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 of `data` under `key`. Any key length is accepted.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<[u8; MAC_LEN_32], CryptoError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|_| CryptoError::Failure("HMAC-SHA256 init failed".into()))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().into())
}

/// Recompute and compare against `tag` using the `hmac` crate's
/// constant-time verification.
pub fn verify_hmac_sha256(key: &[u8], data: &[u8], tag: &[u8]) -> bool {
    let Ok(mut mac) = HmacSha256::new_from_slice(key) else {
        return false;
    };
    mac.update(data);
    mac.verify_slice(tag).is_ok()
}
