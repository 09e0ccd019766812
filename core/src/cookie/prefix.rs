// ## 📂 File: `src/cookie/prefix.rs`

//! cookie/prefix.rs
//! `__Secure-` / `__Host-` name prefix policy.
//!
//! - Secure: name gets `__Secure-`, `secure` forced on.
//! - Host: name gets `__Host-`, `secure` forced on, `path` forced to `/`,
//!   `domain` removed. Caller values for those three are ignored.
//! - No prefix: name and options untouched.

use std::borrow::Cow;

use crate::constants::DEFAULT_PATH;
use crate::cookie::types::{CookieOptions, CookiePrefix};

/// Name as it appears on the wire.
pub fn physical_name<'a>(name: &'a str, prefix: Option<CookiePrefix>) -> Cow<'a, str> {
    match prefix {
        Some(p) => Cow::Owned(format!("{}{}", p.as_str(), name)),
        None => Cow::Borrowed(name),
    }
}

/// Apply the policy selected by `opts.prefix`.
/// Returns the physical name and the options to serialize with.
pub fn apply_prefix(name: &str, opts: &CookieOptions) -> (String, CookieOptions) {
    let mut out = opts.clone();
    match opts.prefix {
        Some(CookiePrefix::Secure) => {
            out.secure = true;
        }
        Some(CookiePrefix::Host) => {
            out.secure = true;
            out.path = Some(DEFAULT_PATH.to_owned());
            out.domain = None;
        }
        None => {}
    }
    (physical_name(name, opts.prefix).into_owned(), out)
}
