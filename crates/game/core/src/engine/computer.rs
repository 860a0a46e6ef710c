//! The computer's half of a turn.
//!
//! Generating the computer's word is asynchronous and lives in the runtime;
//! the engine only brackets it. [`begin_computer_turn`] raises the loading
//! flag before the request goes out and [`resolve_computer_turn`] folds the
//! answer (or the failure) back into the state.

use crate::config::GameConfig;
use crate::ledger;
use crate::state::{GameState, Player};
use crate::validation::ValidationError;

use super::{SubmitError, end_round, submit_word};

/// Message shown when the oracle could not produce a word at all.
pub const COMPUTER_FAILED_MESSAGE: &str = "Computer failed to respond";

/// Why no word came back for the computer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct OracleFailure {
    pub reason: String,
}

impl OracleFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// What the computer's turn amounted to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComputerMove {
    /// The word was chained; the human is up.
    Played { word: String },
    /// The word broke the rules; the human wins the round.
    Rejected {
        word: String,
        error: ValidationError,
    },
    /// The oracle failed; the human wins the round.
    Failed(OracleFailure),
    /// It was no longer the computer's turn; nothing changed.
    Stale,
}

/// Marks the computer as thinking.
pub fn begin_computer_turn(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.is_loading = true;
    next
}

/// Applies the oracle's answer to the computer's turn.
///
/// Any failure forfeits the round to the human. A played word also counts
/// one computer turn off the active power-ups.
pub fn resolve_computer_turn(
    state: &GameState,
    answer: Result<String, OracleFailure>,
    config: &GameConfig,
) -> (GameState, ComputerMove) {
    let word = match answer {
        Ok(word) => word,
        Err(failure) => {
            if !state.is_turn_of(Player::Computer) {
                return (state.clone(), ComputerMove::Stale);
            }
            let mut next = end_round(state, Player::Human, config);
            next.error = Some(COMPUTER_FAILED_MESSAGE.to_string());
            return (next, ComputerMove::Failed(failure));
        }
    };

    match submit_word(state, &word, Player::Computer) {
        Ok(next) => {
            let mut next = ledger::update_active_power_ups(&next);
            next.is_loading = false;
            let word = next.current_word.clone();
            (next, ComputerMove::Played { word })
        }
        Err(SubmitError::Invalid(error)) => {
            let next = end_round(state, Player::Human, config);
            (next, ComputerMove::Rejected { word, error })
        }
        Err(SubmitError::NotPlaying { .. } | SubmitError::NotCurrentPlayer { .. }) => {
            (state.clone(), ComputerMove::Stale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{start, submit_word};
    use crate::ledger::find_in_catalog;
    use crate::state::{GameStatus, Profile, Score};

    fn computer_to_move() -> GameState {
        let state = start(&GameState::new("apple", 10, Profile::new_player(50)));
        let state = submit_word(&state, "elephant", Player::Human).unwrap();
        begin_computer_turn(&state)
    }

    #[test]
    fn played_word_returns_turn_to_human() {
        let mut state = computer_to_move();
        state
            .active_power_ups
            .push(find_in_catalog("easy-mode").unwrap().clone());

        let (next, outcome) =
            resolve_computer_turn(&state, Ok("Tiger".into()), &GameConfig::default());

        assert_eq!(outcome, ComputerMove::Played { word: "tiger".into() });
        assert_eq!(next.current_player, Player::Human);
        assert!(!next.is_loading);
        assert_eq!(next.active_power_ups[0].duration, Some(2));
        assert_eq!(next.wallet.coins, state.wallet.coins);
    }

    #[test]
    fn invalid_word_forfeits_to_human() {
        let state = computer_to_move();

        let (next, outcome) =
            resolve_computer_turn(&state, Ok("elephant".into()), &GameConfig::default());

        assert!(matches!(
            outcome,
            ComputerMove::Rejected {
                error: ValidationError::AlreadyUsed,
                ..
            }
        ));
        assert_eq!(next.status, GameStatus::GameOver);
        assert_eq!(next.score, Score::new(1, 0));
        assert!(!next.is_loading);
    }

    #[test]
    fn oracle_failure_forfeits_with_message() {
        let state = computer_to_move();

        let (next, outcome) = resolve_computer_turn(
            &state,
            Err(OracleFailure::new("task panicked")),
            &GameConfig::default(),
        );

        assert!(matches!(outcome, ComputerMove::Failed(_)));
        assert_eq!(next.score, Score::new(1, 0));
        assert_eq!(next.error.as_deref(), Some(COMPUTER_FAILED_MESSAGE));
    }

    #[test]
    fn answer_after_round_ended_changes_nothing() {
        let state = crate::engine::time_up(&computer_to_move(), &GameConfig::default());

        let (next, outcome) =
            resolve_computer_turn(&state, Ok("tiger".into()), &GameConfig::default());

        assert_eq!(outcome, ComputerMove::Stale);
        assert_eq!(next, state);
    }
}
