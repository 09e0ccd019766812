// ## 📂 File: `src/constants.rs`

//! Wire constants shared by every layer.
//!
//! Anything in here is part of the byte format: changing a value silently
//! breaks cookies issued by an earlier build.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Request header carrying `name=value; name=value` pairs.
pub const COOKIE_HEADER: &str = "Cookie";
/// Response header, one entry per cookie.
pub const SET_COOKIE_HEADER: &str = "Set-Cookie";

/// Name prefix forcing `Secure`.
pub const SECURE_PREFIX: &str = "__Secure-";
/// Name prefix forcing `Secure`, `Path=/` and no `Domain`.
pub const HOST_PREFIX: &str = "__Host-";

/// Path applied by the facade when the caller leaves it unset.
pub const DEFAULT_PATH: &str = "/";

/// Upper bound for `Max-Age` and for `Expires` relative to now: 400 days.
pub const MAX_COOKIE_AGE_SECS: u64 = 400 * 24 * 60 * 60;

/// Length of a standard-base64 HMAC-SHA256 digest (32 bytes, one `=` pad).
pub const SIGNATURE_LEN: usize = 44;
/// Separator between a signed value and its signature.
pub const SIGNATURE_SEPARATOR: char = '.';

/// Separator between the fields of a sealed value.
pub const SEAL_SEPARATOR: char = '*';
/// `salt*iv*ciphertext*hmacSalt*hmac`
pub const SEAL_FIELD_COUNT: usize = 5;

/// Characters left untouched by `encodeURIComponent`.
/// Everything else is emitted as `%XX` of its UTF-8 bytes.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');
