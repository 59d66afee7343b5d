//! Durable chat state for zuschat
//!
//! A `KeyValueStore` capability with file and in-memory backends, and the
//! `SessionStore` that keeps the session id and message history in it.

mod error;
mod session;
mod storage;

pub use error::StoreError;
pub use session::SessionStore;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
