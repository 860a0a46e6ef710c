//! Repository contracts for persisted key-value data.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::Result;

/// String-keyed storage of serialized values.
///
/// Implementations only move opaque strings around; encoding lives in
/// [`KeyValueStoreExt`].
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` if the key was never written.
    fn get_raw(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_raw(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// JSON helpers available on every [`KeyValueStore`].
pub trait KeyValueStoreExt: KeyValueStore {
    /// Loads and decodes `key`.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_raw(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Loads `key`, falling back to `default` when it is missing, unreadable
    /// or does not decode.
    fn load_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.load(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(error) => {
                tracing::warn!(key, %error, "Stored value unusable, using default");
                default
            }
        }
    }

    /// Encodes `value` as JSON and stores it under `key`.
    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}
