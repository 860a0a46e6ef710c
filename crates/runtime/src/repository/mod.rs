//! Repository layer for data that outlives a session.
//!
//! Everything persisted is a small JSON value under a string key: the score,
//! the wallet, the difficulty and the last daily-login date. The
//! [`KeyValueStore`] contract stays deliberately raw (strings in, strings out);
//! typed access goes through [`KeyValueStoreExt`] and [`ProfileRepository`].

mod error;
mod file;
mod memory;
mod profile;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
pub use profile::{ProfileRepository, keys};
pub use traits::{KeyValueStore, KeyValueStoreExt};
