//! cookie-core
//!
//! Plain, signed and sealed cookie values.
//! No async runtime, no framework glue.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

pub mod cookie;
pub mod crypto;

// Facade over a header container
pub mod container;
pub mod jar;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::container::HeaderContainer;
    pub use crate::cookie::{CookieOptions, CookiePrefix, Cookies, Priority, SameSite, VerifiedCookies};
    pub use crate::crypto::Verified;
    pub use crate::jar::*;
    pub use crate::types::CookieError;
}
