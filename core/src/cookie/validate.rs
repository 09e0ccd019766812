//! Attribute checks run by the facade before a cookie is serialized.
//!
//! These guard the configuration boundary. `serialize` itself renders
//! whatever it is given.

use chrono::{Duration, Utc};

use crate::constants::{DEFAULT_PATH, HOST_PREFIX, MAX_COOKIE_AGE_SECS, SECURE_PREFIX};
use crate::cookie::types::CookieOptions;
use crate::types::CookieError;

/// Check `opts` for the cookie named `physical_name` (prefix already applied).
pub fn validate_options(physical_name: &str, opts: &CookieOptions) -> Result<(), CookieError> {
    if physical_name.starts_with(SECURE_PREFIX) && !opts.secure {
        return Err(CookieError::SecurePrefixRequiresSecure);
    }

    if physical_name.starts_with(HOST_PREFIX) {
        if !opts.secure {
            return Err(CookieError::HostPrefixRequiresSecure);
        }
        if opts.path.as_deref() != Some(DEFAULT_PATH) {
            return Err(CookieError::HostPrefixRequiresRootPath);
        }
        if opts.domain.is_some() {
            return Err(CookieError::HostPrefixForbidsDomain);
        }
    }

    if let Some(max_age) = opts.max_age {
        if max_age > MAX_COOKIE_AGE_SECS {
            return Err(CookieError::MaxAgeTooLong { max_age });
        }
    }

    if let Some(expires) = opts.expires {
        // MAX_COOKIE_AGE_SECS fits comfortably in i64.
        if expires - Utc::now() > Duration::seconds(MAX_COOKIE_AGE_SECS as i64) {
            return Err(CookieError::ExpiresTooFar { expires });
        }
    }

    if opts.partitioned && !opts.secure {
        return Err(CookieError::PartitionedRequiresSecure);
    }

    Ok(())
}
