//! Computer-turn orchestration shared by the session worker and embedders
//! that drive the engine without one.

use game_core::engine::{self, OracleFailure};
use game_core::{GameConfig, GameState, Player};

use crate::oracle::{WordOracle, WordRequest};

/// Asks the oracle for a word in a separate task.
///
/// The oracle itself never fails; a task that dies (panics or is cancelled)
/// is reported as an [`OracleFailure`].
pub async fn fetch_computer_word(
    oracle: &WordOracle,
    request: WordRequest,
) -> Result<String, OracleFailure> {
    let oracle = oracle.clone();
    tokio::spawn(async move { oracle.next_word(&request).await })
        .await
        .map_err(|error| OracleFailure::new(error.to_string()))
}

/// Plays the computer's turn in one go: raise the loading flag, fetch a word,
/// fold the answer back in.
///
/// Returns the state unchanged if it is not the computer's turn.
pub async fn handle_computer_turn(
    state: &GameState,
    oracle: &WordOracle,
    config: &GameConfig,
) -> GameState {
    if !state.is_turn_of(Player::Computer) {
        return state.clone();
    }

    let thinking = engine::begin_computer_turn(state);
    let answer = fetch_computer_word(oracle, WordRequest::from_state(&thinking)).await;
    let (next, outcome) = engine::resolve_computer_turn(&thinking, answer, config);
    tracing::debug!(?outcome, "Computer turn resolved");
    next
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use game_core::{GameStatus, Profile, Score};

    use super::*;
    use crate::oracle::{OracleConfig, OracleError, WordGenerator};

    struct Answer(&'static str);

    #[async_trait]
    impl WordGenerator for Answer {
        async fn generate(&self, _request: &WordRequest) -> Result<String, OracleError> {
            Ok(self.0.to_string())
        }
    }

    struct Crash;

    #[async_trait]
    impl WordGenerator for Crash {
        async fn generate(&self, _request: &WordRequest) -> Result<String, OracleError> {
            panic!("generator crashed");
        }
    }

    fn computer_to_move() -> GameState {
        let state = engine::start(&GameState::new("apple", 10, Profile::new_player(50)));
        engine::submit_word(&state, "elephant", Player::Human).unwrap()
    }

    #[tokio::test]
    async fn computer_plays_generated_word() {
        let oracle = WordOracle::new(Arc::new(Answer("tiger")), OracleConfig::default());

        let next = handle_computer_turn(&computer_to_move(), &oracle, &GameConfig::default()).await;

        assert_eq!(next.current_word, "tiger");
        assert_eq!(next.current_player, Player::Human);
        assert!(!next.is_loading);
    }

    #[tokio::test]
    async fn crashed_oracle_forfeits_round() {
        let oracle = WordOracle::new(Arc::new(Crash), OracleConfig::default());

        let next = handle_computer_turn(&computer_to_move(), &oracle, &GameConfig::default()).await;

        assert_eq!(next.status, GameStatus::GameOver);
        assert_eq!(next.score, Score::new(1, 0));
        assert_eq!(next.error.as_deref(), Some(engine::COMPUTER_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn human_turn_is_left_alone() {
        let state = engine::start(&GameState::new("apple", 10, Profile::default()));
        let oracle = WordOracle::fallback_only();

        let next = handle_computer_turn(&state, &oracle, &GameConfig::default()).await;

        assert_eq!(next, state);
    }
}
