//! Error types for word submission.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameStatus, Player};
use crate::validation::ValidationError;

/// Errors surfaced while submitting a word through the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("no round is being played (status: {status:?})")]
    NotPlaying { status: GameStatus },

    #[error("it is not {player}'s turn (current: {current})")]
    NotCurrentPlayer { player: Player, current: Player },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl GameError for SubmitError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Invalid(error) => error.severity(),
            Self::NotPlaying { .. } | Self::NotCurrentPlayer { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotPlaying { .. } => "NOT_PLAYING",
            Self::NotCurrentPlayer { .. } => "NOT_CURRENT_PLAYER",
            Self::Invalid(error) => error.error_code(),
        }
    }
}
