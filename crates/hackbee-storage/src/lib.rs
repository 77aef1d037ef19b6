//! Persisted key-value storage for the HackBee client.
//!
//! The client keeps a handful of string values between runs, most importantly
//! the access token issued at login. Consumers that only need to look values up
//! (such as the API client) depend on [`StoreReader`]; code that logs users in
//! and out uses the writable [`Store`].
//!
//! # Example
//!
//! ```rust,ignore
//! use hackbee_storage::{access_token, FileStore, Store, ACCESS_TOKEN_KEY};
//!
//! let store = FileStore::open("/home/me/.local/share/hackbee/storage.json");
//!
//! // Persist a token after login
//! store.set(ACCESS_TOKEN_KEY, "tok123")?;
//!
//! // Later, read it back
//! let token: Option<String> = access_token(&store)?;
//! ```

mod error;
mod file;
mod memory;
mod store;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{access_token, Store, StoreReader, ACCESS_TOKEN_KEY};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{access_token, FileStore, MemoryStore, StorageError, Store, StoreReader};
}
