pub mod types;
pub mod random;
pub mod kdf;
pub mod cipher;
pub mod mac;
pub mod compare;
pub mod signature;
pub mod seal;

pub use types::*;
pub use kdf::*;
pub use compare::*;
pub use signature::*;
pub use seal::*;
