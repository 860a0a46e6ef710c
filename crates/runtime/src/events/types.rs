//! Event payloads.

use game_core::{GameState, Player, Score, TurnTag};
use serde::{Deserialize, Serialize};

/// Something observable happened in the session.
///
/// `StateChanged` follows every applied transition, so a frontend that only
/// renders snapshots can ignore the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    StateChanged(Box<GameState>),

    WordAccepted {
        player: Player,
        word: String,
        tag: TurnTag,
    },

    WordRejected {
        player: Player,
        word: String,
        reason: String,
    },

    /// The oracle was asked for the computer's word.
    ComputerThinking { tag: TurnTag },

    /// A skip-turn power-up handed the turn back to the human.
    TurnSkipped { tag: TurnTag },

    RoundEnded { winner: Player, score: Score },

    /// One second of the human's turn elapsed.
    TimerTick { tag: TurnTag, remaining: u32 },
}
