// ## 📂 File: `src/crypto/cipher.rs`

//! src/crypto/cipher.rs
//! AES-256-CBC with PKCS#7 padding.
//!
//! Design notes:
//! - 32-byte key, 16-byte IV, both supplied by the caller (see kdf).
//! - CBC has no tag; integrity comes from the HMAC wrapped around the
//!   ciphertext by the sealing protocol. Never decrypt before that check.
//! - Any padding or length failure maps to `DecryptionFailed` so the cause
//!   is not observable from outside.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;

use crate::crypto::types::{CryptoError, IV_LEN_16, KEY_LEN_32};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

fn check_lengths(key: &[u8], iv: &[u8]) -> Result<(), CryptoError> {
    if key.len() != KEY_LEN_32 {
        return Err(CryptoError::InvalidKeyLen {
            expected: KEY_LEN_32,
            actual: key.len(),
        });
    }
    if iv.len() != IV_LEN_16 {
        return Err(CryptoError::InvalidIvLen {
            expected: IV_LEN_16,
            actual: iv.len(),
        });
    }
    Ok(())
}

/// Encrypt `plaintext`. Output length is the next multiple of 16 above the input.
pub fn encrypt_cbc(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    check_lengths(key, iv)?;
    let cipher = Aes256CbcEnc::new_from_slices(key, iv)
        .map_err(|_| CryptoError::Failure("AES-256-CBC init failed".into()))?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypt and strip padding.
pub fn decrypt_cbc(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    check_lengths(key, iv)?;
    let cipher = Aes256CbcDec::new_from_slices(key, iv)
        .map_err(|_| CryptoError::DecryptionFailed)?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::DecryptionFailed)
}
