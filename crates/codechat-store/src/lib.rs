//! # codechat-store
//!
//! In-memory state of the codechat backend: the user directory, the
//! friendship graph and the message log, plus the chat-list projection
//! computed from them.
//!
//! The individual stores are plain synchronous structures. [`ChatStore`]
//! owns all three behind `tokio::sync::RwLock`s and is what the server
//! shares between request handlers.

pub mod chats;
pub mod directory;
pub mod friends;
pub mod messages;
pub mod models;
pub mod store;

mod error;

pub use error::{Result, StoreError};
pub use models::*;
pub use store::{ChatStore, StoreStats};
