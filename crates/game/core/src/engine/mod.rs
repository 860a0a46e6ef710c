//! Turn state machine.
//!
//! The engine owns the rules for moving a [`GameState`] through
//! `Idle → Playing → GameOver → Idle | Playing`. Every transition is a pure
//! function from the current snapshot (plus input) to the next snapshot, so
//! the runtime can apply results atomically and tests can drive whole rounds
//! without a clock or a network.

mod computer;
mod errors;

pub use computer::{
    COMPUTER_FAILED_MESSAGE, ComputerMove, OracleFailure, begin_computer_turn,
    resolve_computer_turn,
};
pub use errors::SubmitError;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::GameConfig;
use crate::ledger::{self, RewardKind};
use crate::state::{ChainEntry, Difficulty, GameState, GameStatus, Player, Profile, Score};
use crate::validation::{self, ValidationError};

/// Creates the session state: a fresh chain plus the persisted profile.
pub fn initialize<R>(config: &GameConfig, profile: Profile, rng: &mut R) -> GameState
where
    R: Rng + ?Sized,
{
    GameState::new(pick_seed_word(config, rng), config.time_limit, profile)
}

/// Begins play from `Idle` or `GameOver`. No-op while a round is running.
pub fn start(state: &GameState) -> GameState {
    let mut next = state.clone();
    if state.is_playing() {
        return next;
    }

    next.status = GameStatus::Playing;
    next.current_player = Player::Human;
    next.time_left = next.base_time_limit;
    next.is_loading = false;
    next.error = None;
    next.round += 1;
    next
}

/// Plays `word` for `player`.
///
/// On success the word is chained, the turn passes to the opponent with a
/// fresh clock and a human submission earns coins. On failure the state is
/// left untouched; [`SubmitError::Invalid`] is the caller's cue to end the
/// round via [`reject_word`].
pub fn submit_word(
    state: &GameState,
    word: &str,
    player: Player,
) -> Result<GameState, SubmitError> {
    if !state.is_playing() {
        return Err(SubmitError::NotPlaying {
            status: state.status,
        });
    }
    if state.current_player != player {
        return Err(SubmitError::NotCurrentPlayer {
            player,
            current: state.current_player,
        });
    }

    let word = validation::normalize(word);
    validation::validate_word(&word, state.expected_first_letter(), state.used_words())?;

    let mut next = state.clone();
    next.word_chain.push(ChainEntry::played(word.clone(), player));
    next.current_word = word;
    next.current_player = player.opponent();
    next.time_left = next.base_time_limit;
    next.error = None;
    next.nonce += 1;

    if player == Player::Human {
        next = ledger::award_coins(&next, RewardKind::WordSubmitted, 1.0);
    }

    Ok(next)
}

/// Ends the round after `player` submitted an invalid word.
///
/// Any invalid word loses the round; the opponent is the winner and the
/// reason is kept as the user-facing error.
pub fn reject_word(
    state: &GameState,
    player: Player,
    error: &ValidationError,
    config: &GameConfig,
) -> GameState {
    let mut next = end_round(state, player.opponent(), config);
    next.error = Some(error.to_string());
    next
}

/// Scores the round for `winner` and moves to `GameOver`.
///
/// A human win pays the round bonus, plus the game bonus on the win that
/// first puts the player at `games_to_win` and ahead of the computer.
/// The chain is left for an explicit [`reset_round`].
pub fn end_round(state: &GameState, winner: Player, config: &GameConfig) -> GameState {
    let mut next = state.clone();
    let before = next.score;

    match winner {
        Player::Human => next.score.player += 1,
        Player::Computer => next.score.computer += 1,
    }

    if winner == Player::Human {
        next = ledger::award_coins(&next, RewardKind::RoundWon, 1.0);
        if has_won_game(&next.score, config) && !has_won_game(&before, config) {
            next = ledger::award_coins(&next, RewardKind::GameWon, 1.0);
        }
    }

    next.status = GameStatus::GameOver;
    next.is_loading = false;
    next
}

/// The player whose clock ran out loses the round.
///
/// No-op unless a round is being played.
pub fn time_up(state: &GameState, config: &GameConfig) -> GameState {
    if !state.is_playing() {
        return state.clone();
    }
    end_round(state, state.current_player.opponent(), config)
}

/// Seeds a new chain and returns to `Idle`, keeping wallet, score and
/// difficulty.
pub fn reset_round<R>(state: &GameState, config: &GameConfig, rng: &mut R) -> GameState
where
    R: Rng + ?Sized,
{
    let seed = pick_seed_word(config, rng);
    let mut next = state.clone();

    next.status = GameStatus::Idle;
    next.current_player = Player::Human;
    next.word_chain = vec![ChainEntry::seed(seed.clone())];
    next.current_word = seed;
    next.time_left = next.base_time_limit;
    next.active_power_ups.clear();
    next.is_loading = false;
    next.error = None;
    next.round += 1;
    next
}

/// Letter the next word has to start with.
pub fn expected_first_letter(state: &GameState) -> char {
    state.expected_first_letter()
}

/// Changes difficulty. Applies from the next oracle request on; the running
/// turn and the chain are unaffected.
pub fn set_difficulty(state: &GameState, difficulty: Difficulty) -> GameState {
    let mut next = state.clone();
    next.difficulty = difficulty;
    next
}

pub fn clear_error(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.error = None;
    next
}

/// Mirrors the countdown's remaining seconds into the state.
pub fn sync_time_left(state: &GameState, remaining: u32) -> GameState {
    let mut next = state.clone();
    next.time_left = remaining;
    next
}

fn has_won_game(score: &Score, config: &GameConfig) -> bool {
    score.player >= config.games_to_win && score.player > score.computer
}

fn pick_seed_word<R>(config: &GameConfig, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    config
        .initial_words
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| GameConfig::DEFAULT_INITIAL_WORDS[0].to_string())
}
