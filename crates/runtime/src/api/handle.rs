//! Cloneable façade for issuing commands to the session.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers one async method per
//! player-facing operation. Computer turns and turn timeouts are driven by
//! the runtime itself; frontends learn about them through [`GameEvent`]s.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{Difficulty, GameState};

use super::errors::{Result, RuntimeError};
use crate::events::{EventBus, GameEvent};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Starts a round. No-op while one is being played.
    pub async fn start(&self) -> Result<GameState> {
        self.request(|reply| Command::Start { reply }).await
    }

    /// Submits the human's word.
    ///
    /// An invalid word ends the round in the computer's favour; the error is
    /// returned after that transition has been applied.
    pub async fn submit_word(&self, word: impl Into<String>) -> Result<GameState> {
        let word = word.into();
        self.request(|reply| Command::SubmitWord { word, reply })
            .await?
    }

    /// Seeds a fresh chain and returns to idle.
    pub async fn reset_round(&self) -> Result<GameState> {
        self.request(|reply| Command::ResetRound { reply }).await
    }

    /// Buys one catalog power-up into the wallet.
    pub async fn purchase_power_up(&self, id: impl Into<String>) -> Result<GameState> {
        let id = id.into();
        self.request(|reply| Command::PurchasePowerUp { id, reply })
            .await?
    }

    /// Uses one owned power-up.
    pub async fn activate_power_up(&self, id: impl Into<String>) -> Result<GameState> {
        let id = id.into();
        self.request(|reply| Command::ActivatePowerUp { id, reply })
            .await?
    }

    /// Spends an active skip-turn. No-op if none is active.
    pub async fn consume_skip_turn(&self) -> Result<GameState> {
        self.request(|reply| Command::ConsumeSkipTurn { reply }).await
    }

    pub async fn set_difficulty(&self, difficulty: Difficulty) -> Result<GameState> {
        self.request(|reply| Command::SetDifficulty { difficulty, reply })
            .await
    }

    pub async fn clear_error(&self) -> Result<GameState> {
        self.request(|reply| Command::ClearError { reply }).await
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Subscribe to session events.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut events = handle.subscribe();
    /// while let Ok(event) = events.recv().await {
    ///     if let GameEvent::StateChanged(state) = event {
    ///         render(&state);
    ///     }
    /// }
    /// ```
    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.event_bus.subscribe()
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}
