//! cookie/mod.rs
//! Cookie header grammar: parsing, Set-Cookie rendering, name prefixes.
//!
//! Notes:
//! - Parsing is lenient and silent: bad pairs vanish, nothing errors.
//! - Rendering is strict about attribute order; that order is wire format.
//! - Prefix rules override caller options, they never merge with them.

pub mod types;
pub mod decode;
pub mod encode;
pub mod prefix;
pub mod validate;

pub use types::*;
pub use decode::*;
pub use encode::*;
pub use prefix::*;
pub use validate::*;
