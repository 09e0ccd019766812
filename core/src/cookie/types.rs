// ## 📂 File: `src/cookie/types.rs`

//! cookie/types.rs
//! Attribute options and the parsed cookie set.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::constants::{HOST_PREFIX, SECURE_PREFIX};
use crate::crypto::Verified;

/// Parsed `Cookie` header: name -> decoded value. Last occurrence wins.
pub type Cookies = HashMap<String, String>;

/// Parsed signed or sealed cookies: name -> verification outcome.
/// Entries that were not even well-formed are absent.
pub type VerifiedCookies = HashMap<String, Verified>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        })
    }
}

/// Name prefix selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CookiePrefix {
    /// `__Secure-`
    Secure,
    /// `__Host-`
    Host,
}

impl CookiePrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            CookiePrefix::Secure => SECURE_PREFIX,
            CookiePrefix::Host => HOST_PREFIX,
        }
    }
}

/// Set-Cookie attributes.
///
/// Only attributes that are set are emitted. `prefix` is not an attribute;
/// it selects the name prefix policy applied by the facade.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CookieOptions {
    pub domain: Option<String>,
    pub path: Option<String>,
    pub expires: Option<DateTime<Utc>>,
    /// Seconds.
    pub max_age: Option<u64>,
    pub http_only: bool,
    pub secure: bool,
    pub same_site: Option<SameSite>,
    pub priority: Option<Priority>,
    pub partitioned: bool,
    pub prefix: Option<CookiePrefix>,
}

impl CookieOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_expires(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    pub fn with_max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_partitioned(mut self, partitioned: bool) -> Self {
        self.partitioned = partitioned;
        self
    }

    pub fn with_prefix(mut self, prefix: CookiePrefix) -> Self {
        self.prefix = Some(prefix);
        self
    }
}
