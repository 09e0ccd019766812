use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::crypto::CryptoError;

/// Unified cookie error covering crypto, attribute policy and header I/O.
/// - `From<CryptoError>` enables `?` from the signing/sealing layer.
/// - Only write paths produce these; read paths drop or flag entries instead.
#[derive(Debug, Error)]
pub enum CookieError {
    /// Cryptographic error (key generation, sealing).
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("__Secure- cookie must have the Secure attribute")]
    SecurePrefixRequiresSecure,

    #[error("__Host- cookie must have the Secure attribute")]
    HostPrefixRequiresSecure,

    #[error("__Host- cookie must have Path=/")]
    HostPrefixRequiresRootPath,

    #[error("__Host- cookie must not have a Domain attribute")]
    HostPrefixForbidsDomain,

    #[error("Partitioned cookie must have the Secure attribute")]
    PartitionedRequiresSecure,

    /// Max-Age beyond the 400 day ceiling.
    #[error("Max-Age {max_age}s exceeds 400 days")]
    MaxAgeTooLong { max_age: u64 },

    /// Expires beyond the 400 day ceiling, measured from now.
    #[error("Expires {expires} is more than 400 days away")]
    ExpiresTooFar { expires: DateTime<Utc> },

    /// The header container refused the value.
    #[error("invalid header value for {name}: {reason}")]
    InvalidHeaderValue { name: String, reason: String },
}
