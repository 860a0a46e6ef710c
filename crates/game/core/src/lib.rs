//! Deterministic word-chain rules shared by the runtime and the client.
//!
//! `game-core` defines the canonical rules (validation, economy, turn engine)
//! and exposes pure APIs: every transition takes the current [`GameState`] by
//! reference and returns the next one, so callers replace state wholesale and
//! tests can drive the rules without any I/O. Randomness is injected as a
//! [`rand::Rng`] so seeded runs are reproducible.
pub mod config;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod state;
pub mod timer;
pub mod validation;

pub use config::GameConfig;
pub use engine::{OracleFailure, SubmitError};
pub use error::{ErrorSeverity, GameError};
pub use ledger::{EconomyError, RewardKind};
pub use state::{
    ChainEntry, Difficulty, DifficultySettings, GameState, GameStatus, Player, PowerUp,
    PowerUpKind, Profile, Score, TurnTag, Wallet,
};
pub use timer::{Countdown, TickOutcome};
pub use validation::ValidationError;
