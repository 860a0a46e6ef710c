//! Authoritative game state representation.
//!
//! This module owns the data structures that describe a session: the word
//! chain, turn bookkeeping, score and the wallet. Runtime layers clone or
//! query this state but produce new versions exclusively through
//! [`crate::engine`] and [`crate::ledger`].
mod difficulty;
mod power_up;
mod wallet;

pub use difficulty::{Difficulty, DifficultySettings};
pub use power_up::{PowerUp, PowerUpKind};
pub use wallet::Wallet;

use crate::validation;

/// Lifecycle of a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum GameStatus {
    #[default]
    Idle,
    Playing,
    GameOver,
}

/// The two seats at the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Player {
    #[default]
    Human,
    Computer,
}

impl Player {
    /// Returns the other player.
    pub const fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

/// Round wins per player, kept across rounds and persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub player: u32,
    pub computer: u32,
}

impl Score {
    pub const fn new(player: u32, computer: u32) -> Self {
        Self { player, computer }
    }

    /// Returns the number of rounds won by `player`.
    pub const fn of(&self, player: Player) -> u32 {
        match player {
            Player::Human => self.player,
            Player::Computer => self.computer,
        }
    }
}

/// A word in the chain and who played it.
///
/// The seed word that opens a round has no player.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainEntry {
    pub word: String,
    pub played_by: Option<Player>,
}

impl ChainEntry {
    pub fn seed(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            played_by: None,
        }
    }

    pub fn played(word: impl Into<String>, player: Player) -> Self {
        Self {
            word: word.into(),
            played_by: Some(player),
        }
    }
}

/// Identifies one turn of one round.
///
/// Async work (oracle requests, timer ticks) is tagged with the turn it was
/// started for; a result whose tag no longer matches [`GameState::turn_tag`]
/// belongs to a turn that is already over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnTag {
    pub round: u64,
    pub nonce: u64,
}

impl core::fmt::Display for TurnTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "r{}#{}", self.round, self.nonce)
    }
}

/// The persisted part of a session: everything that survives a restart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    pub score: Score,
    pub wallet: Wallet,
    pub difficulty: Difficulty,
}

impl Profile {
    /// Profile of a player who has never played before.
    pub fn new_player(starting_coins: u32) -> Self {
        Self {
            score: Score::default(),
            wallet: Wallet::with_coins(starting_coins),
            difficulty: Difficulty::default(),
        }
    }
}

/// Canonical snapshot of a game session.
///
/// Transitions never mutate a snapshot that is already published; they clone
/// it, apply their changes and hand back the result.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub status: GameStatus,

    /// Whose turn it is. Only meaningful while [`GameStatus::Playing`].
    pub current_player: Player,

    /// Accepted words in play order; the first entry is the round's seed.
    pub word_chain: Vec<ChainEntry>,

    /// Last accepted word. Its final letter is the next required first letter.
    pub current_word: String,

    /// Seconds remaining in the current turn.
    pub time_left: u32,

    /// Per-turn budget every accepted word resets `time_left` to.
    pub base_time_limit: u32,

    pub difficulty: Difficulty,
    pub score: Score,
    pub wallet: Wallet,

    /// Power-ups currently in effect.
    pub active_power_ups: Vec<PowerUp>,

    /// True while the computer's word is being generated.
    pub is_loading: bool,

    /// Last user-facing failure message.
    pub error: Option<String>,

    /// Monotonic round counter, bumped whenever a round starts or is reset.
    pub round: u64,

    /// Monotonic turn counter within the session, bumped on every turn change.
    pub nonce: u64,
}

impl GameState {
    /// Creates an idle state seeded with `seed_word` and the given profile.
    pub fn new(seed_word: impl Into<String>, time_limit: u32, profile: Profile) -> Self {
        let seed_word = seed_word.into();
        Self {
            status: GameStatus::Idle,
            current_player: Player::Human,
            word_chain: vec![ChainEntry::seed(seed_word.clone())],
            current_word: seed_word,
            time_left: time_limit,
            base_time_limit: time_limit,
            difficulty: profile.difficulty,
            score: profile.score,
            wallet: profile.wallet,
            active_power_ups: Vec::new(),
            is_loading: false,
            error: None,
            round: 0,
            nonce: 0,
        }
    }

    /// Letter the next word has to start with (lower-case).
    pub fn expected_first_letter(&self) -> char {
        validation::last_letter(&self.current_word).unwrap_or('a')
    }

    /// Tag identifying the turn in progress.
    pub const fn turn_tag(&self) -> TurnTag {
        TurnTag {
            round: self.round,
            nonce: self.nonce,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// True when `player` may act right now.
    pub fn is_turn_of(&self, player: Player) -> bool {
        self.is_playing() && self.current_player == player
    }

    /// Words already used this round, in play order.
    pub fn used_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.word_chain.iter().map(|entry| entry.word.as_str())
    }

    /// Extracts the persisted profile of this session.
    pub fn profile(&self) -> Profile {
        Profile {
            score: self.score,
            wallet: self.wallet.clone(),
            difficulty: self.difficulty,
        }
    }
}
