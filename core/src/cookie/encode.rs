// ## 📂 File: `src/cookie/encode.rs`
//! src/cookie/encode.rs
//!
//! Set-Cookie serialization.
//!
//! Design notes:
//! - Attribute order is fixed and must match exactly:
//!   Max-Age, Domain, Path, Expires, HttpOnly, Secure, SameSite, Priority, Partitioned.
//! - No policy checks happen here; see `validate` for the configuration boundary.

use crate::cookie::types::CookieOptions;
use crate::utils::{http_date, percent_encode};

/// Render `name=<already encoded value>` plus attributes.
pub fn serialize_raw(name: &str, encoded_value: &str, opts: &CookieOptions) -> String {
    let mut parts = vec![format!("{name}={encoded_value}")];

    if let Some(max_age) = opts.max_age {
        parts.push(format!("Max-Age={max_age}"));
    }
    if let Some(domain) = &opts.domain {
        parts.push(format!("Domain={domain}"));
    }
    if let Some(path) = &opts.path {
        parts.push(format!("Path={path}"));
    }
    if let Some(expires) = &opts.expires {
        parts.push(format!("Expires={}", http_date(expires)));
    }
    if opts.http_only {
        parts.push("HttpOnly".to_owned());
    }
    if opts.secure {
        parts.push("Secure".to_owned());
    }
    if let Some(same_site) = opts.same_site {
        parts.push(format!("SameSite={same_site}"));
    }
    if let Some(priority) = opts.priority {
        parts.push(format!("Priority={priority}"));
    }
    if opts.partitioned {
        parts.push("Partitioned".to_owned());
    }

    parts.join("; ")
}

/// Percent-encode `value` and render the Set-Cookie string.
pub fn serialize(name: &str, value: &str, opts: &CookieOptions) -> String {
    serialize_raw(name, &percent_encode(value), opts)
}
