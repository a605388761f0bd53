//! # codechat-shared
//!
//! Types shared between the store and the HTTP server: the user code
//! handle, the identity supplier that mints ids and codes, and the JSON
//! records exchanged over the API.

pub mod constants;
pub mod identity;
pub mod protocol;
pub mod types;

pub use identity::{IdentitySupplier, RandomIdentity};
pub use types::UserCode;
