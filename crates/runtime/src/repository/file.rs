//! File-based key-value store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::{RepositoryError, Result};
use super::traits::KeyValueStore;

/// File-based implementation of [`KeyValueStore`].
///
/// Each key is stored as `<key>.json` under `base_dir`. Writes go to a
/// temporary file first and are renamed into place, so a crash never leaves
/// a half-written value behind.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    /// Opens (and creates if needed) a store rooted at `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Opens the store in the platform data directory for this game.
    pub fn in_default_location() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "word-train")
            .ok_or(RepositoryError::NoDataDir)?;
        Self::new(dirs.data_dir())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_dir.join(format!("{file_stem}.json"))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved {} to {}", key, path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::KeyValueStoreExt;
    use game_core::Score;

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path()).unwrap();
        store.save("wordTrain_score", &Score::new(4, 2)).unwrap();

        let reopened = FileKeyValueStore::new(dir.path()).unwrap();

        assert_eq!(
            reopened.load_or("wordTrain_score", Score::default()),
            Score::new(4, 2)
        );
        assert!(dir.path().join("wordTrain_score.json").exists());
        assert!(!dir.path().join("wordTrain_score.json.tmp").exists());
    }

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path()).unwrap();

        assert_eq!(store.get_raw("absent").unwrap(), None);
        store.remove("absent").unwrap();
    }

    #[test]
    fn key_cannot_escape_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path()).unwrap();

        store.set_raw("../outside", "1").unwrap();

        assert!(dir.path().join("___outside.json").exists());
    }
}
