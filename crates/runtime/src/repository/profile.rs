//! Typed access to the persisted player profile.

use std::sync::Arc;

use chrono::NaiveDate;
use game_core::{Difficulty, Profile, Score, Wallet};

use super::traits::{KeyValueStore, KeyValueStoreExt};

/// Storage keys. Kept stable so existing saves keep loading.
pub mod keys {
    pub const SCORE: &str = "wordTrain_score";
    pub const WALLET: &str = "word-train-wallet";
    pub const DIFFICULTY: &str = "word-train-difficulty";
    pub const LAST_LOGIN: &str = "word-train-last-login";
}

/// Loads and saves the [`Profile`] through a [`KeyValueStore`].
///
/// Storage failures never reach the caller: reads fall back to defaults and
/// failed writes are logged.
#[derive(Clone)]
pub struct ProfileRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Loads the profile; a first-time player starts with `starting_coins`.
    pub fn load(&self, starting_coins: u32) -> Profile {
        Profile {
            score: self.store.load_or(keys::SCORE, Score::default()),
            wallet: self
                .store
                .load_or(keys::WALLET, Wallet::with_coins(starting_coins)),
            difficulty: self.store.load_or(keys::DIFFICULTY, Difficulty::default()),
        }
    }

    /// Writes every part of `next` that differs from `previous`.
    pub fn persist_changes(&self, previous: &Profile, next: &Profile) {
        if previous.score != next.score {
            self.write(keys::SCORE, &next.score);
        }
        if previous.wallet != next.wallet {
            self.write(keys::WALLET, &next.wallet);
        }
        if previous.difficulty != next.difficulty {
            self.write(keys::DIFFICULTY, &next.difficulty);
        }
    }

    /// Writes the whole profile.
    pub fn save(&self, profile: &Profile) {
        self.write(keys::SCORE, &profile.score);
        self.write(keys::WALLET, &profile.wallet);
        self.write(keys::DIFFICULTY, &profile.difficulty);
    }

    pub fn last_login(&self) -> Option<NaiveDate> {
        self.store.load_or(keys::LAST_LOGIN, None)
    }

    pub fn record_login(&self, date: NaiveDate) {
        self.write(keys::LAST_LOGIN, &date);
    }

    fn write<T: serde::Serialize>(&self, key: &str, value: &T) {
        if let Err(error) = self.store.save(key, value) {
            tracing::warn!(key, %error, "Failed to persist value");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryKeyValueStore;

    fn repository() -> (Arc<InMemoryKeyValueStore>, ProfileRepository) {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let repo = ProfileRepository::new(store.clone());
        (store, repo)
    }

    #[test]
    fn fresh_store_yields_new_player() {
        let (_, repo) = repository();

        assert_eq!(repo.load(50), Profile::new_player(50));
        assert_eq!(repo.last_login(), None);
    }

    #[test]
    fn only_changed_parts_are_written() {
        let (store, repo) = repository();
        let before = Profile::new_player(50);
        let mut after = before.clone();
        after.score = Score::new(1, 0);

        repo.persist_changes(&before, &after);

        assert!(store.get_raw(keys::SCORE).unwrap().is_some());
        assert!(store.get_raw(keys::WALLET).unwrap().is_none());
        assert_eq!(repo.load(50).score, Score::new(1, 0));
    }

    #[test]
    fn stored_formats_are_plain_json() {
        let (store, repo) = repository();
        let mut profile = Profile::new_player(12);
        profile.difficulty = Difficulty::Hard;

        repo.save(&profile);

        assert_eq!(
            store.get_raw(keys::DIFFICULTY).unwrap().as_deref(),
            Some("\"hard\"")
        );
        assert_eq!(
            store.get_raw(keys::WALLET).unwrap().as_deref(),
            Some(r#"{"coins":12,"powerUps":[]}"#)
        );
        assert_eq!(
            store.get_raw(keys::SCORE).unwrap().as_deref(),
            Some(r#"{"player":0,"computer":0}"#)
        );
    }

    #[test]
    fn last_login_round_trips_as_date() {
        let (_, repo) = repository();
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

        repo.record_login(date);

        assert_eq!(repo.last_login(), Some(date));
    }
}
