
// ## 📂 File: `src/crypto/types.rs`

use thiserror::Error;

/// AES-256 key length (bytes).
pub const KEY_LEN_32: usize = 32;

/// AES block / CBC IV length (bytes).
pub const IV_LEN_16: usize = 16;

/// HMAC-SHA256 output length (bytes).
pub const MAC_LEN_32: usize = 32;

/// What a derived key is used for. Decides whether an IV is drawn with it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// AES-256-CBC, needs an IV.
    Aes256Cbc,
    /// HMAC-SHA256, key only.
    Sha256,
}

/// Parameters for one PBKDF2 derivation.
///
/// Both sets used by the sealing protocol are fixed constants; they are
/// part of the byte format and are passed explicitly rather than read
/// from global state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AlgorithmParams {
    pub algorithm: Algorithm,
    /// Random salt size. Zero means the caller must supply the salt.
    pub salt_bits: usize,
    pub key_bits: usize,
    /// Zero for algorithms without an IV.
    pub iv_bits: usize,
    /// PBKDF2-HMAC-SHA1 rounds.
    pub iterations: u32,
}

impl AlgorithmParams {
    pub const AES_256_CBC: AlgorithmParams = AlgorithmParams {
        algorithm: Algorithm::Aes256Cbc,
        salt_bits: 256,
        key_bits: 256,
        iv_bits: 128,
        iterations: 1,
    };

    pub const SHA256: AlgorithmParams = AlgorithmParams {
        algorithm: Algorithm::Sha256,
        salt_bits: 256,
        key_bits: 256,
        iv_bits: 0,
        iterations: 1,
    };

    #[inline]
    pub fn key_len(&self) -> usize {
        self.key_bits / 8
    }

    #[inline]
    pub fn iv_len(&self) -> usize {
        self.iv_bits / 8
    }
}

/// Encryption + integrity parameter pair for sealing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SealParams {
    pub encryption: AlgorithmParams,
    pub integrity: AlgorithmParams,
}

impl SealParams {
    /// The only parameter set sealed cookies are issued with.
    ///
    /// A single PBKDF2 iteration is weak, but raising it breaks every
    /// previously sealed value.
    pub const IRON: SealParams = SealParams {
        encryption: AlgorithmParams::AES_256_CBC,
        integrity: AlgorithmParams::SHA256,
    };
}

impl Default for SealParams {
    fn default() -> Self {
        SealParams::IRON
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Password is empty.
    #[error("empty password")]
    EmptyPassword,

    /// Neither a salt nor a salt size was supplied.
    #[error("missing salt and salt size")]
    MissingSalt,

    /// Invalid key length provided to cipher or MAC.
    #[error("invalid key length: expected={expected}, actual={actual}")]
    InvalidKeyLen { expected: usize, actual: usize },

    /// IV length mismatch (must be 16 bytes for CBC).
    #[error("invalid IV length: expected={expected}, actual={actual}")]
    InvalidIvLen { expected: usize, actual: usize },

    /// Sealed value does not have exactly five fields.
    #[error("malformed sealed value: {fields} fields")]
    MalformedSeal { fields: usize },

    /// HMAC mismatch (tampering or wrong password).
    #[error("integrity check failed")]
    IntegrityCheckFailed,

    /// Cipher rejected the ciphertext, IV or padding, or the plaintext is not UTF-8.
    #[error("decryption failed")]
    DecryptionFailed,

    /// General runtime error with context.
    #[error("crypto failure: {0}")]
    Failure(String),
}
