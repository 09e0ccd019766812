// ## 📂 File: `src/crypto/random.rs`

//! CSPRNG draws for salts and IVs.
//!
//! Security notes:
//! - Every seal/sign call draws fresh material. Never reuse a salt or IV
//!   across calls; two seals of the same plaintext must differ.
//! - Backed by the operating system RNG.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::utils::hex_encode;

/// Fill a fresh buffer of `len` bytes from the OS RNG.
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    OsRng.fill_bytes(&mut out);
    out
}

/// Random salt of `bits` bits, hex-encoded.
///
/// The hex text (not the raw bytes) is what feeds PBKDF2 and what travels
/// in the sealed value.
pub fn random_salt(bits: usize) -> String {
    hex_encode(&random_bytes(bits.div_ceil(8)))
}
