//! Session worker that owns the authoritative [`game_core::GameState`].
//!
//! Receives commands from [`crate::RuntimeHandle`], applies engine and ledger
//! transitions, persists the profile, and publishes events. Oracle answers
//! and timer ticks come back through internal channels and are applied here
//! too, so every transition happens on this one task.

use std::time::Duration;

use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use game_core::engine::{self, ComputerMove, OracleFailure, SubmitError};
use game_core::{
    Difficulty, GameConfig, GameError, GameState, GameStatus, Player, TurnTag, ledger,
};

use super::timer::{CountdownTimer, TimerEvent};
use crate::api::{Result, RuntimeError};
use crate::events::{EventBus, GameEvent};
use crate::oracle::{WordOracle, WordRequest};
use crate::repository::ProfileRepository;
use crate::session::fetch_computer_word;

/// Commands that can be sent to the session worker
pub enum Command {
    Start {
        reply: oneshot::Sender<GameState>,
    },
    SubmitWord {
        word: String,
        reply: oneshot::Sender<Result<GameState>>,
    },
    ResetRound {
        reply: oneshot::Sender<GameState>,
    },
    PurchasePowerUp {
        id: String,
        reply: oneshot::Sender<Result<GameState>>,
    },
    ActivatePowerUp {
        id: String,
        reply: oneshot::Sender<Result<GameState>>,
    },
    ConsumeSkipTurn {
        reply: oneshot::Sender<GameState>,
    },
    SetDifficulty {
        difficulty: Difficulty,
        reply: oneshot::Sender<GameState>,
    },
    ClearError {
        reply: oneshot::Sender<GameState>,
    },
    /// Query the current game state (read-only).
    QueryState {
        reply: oneshot::Sender<GameState>,
    },
}

/// The computer's word for the turn it was requested in.
struct ComputerAnswer {
    tag: TurnTag,
    answer: std::result::Result<String, OracleFailure>,
}

/// Session timing knobs.
#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    /// Pause before the computer starts "thinking".
    pub computer_delay: Duration,
}

/// Background task that processes gameplay commands.
pub struct SessionWorker {
    state: GameState,
    config: GameConfig,
    settings: SessionSettings,
    oracle: WordOracle,
    profiles: ProfileRepository,
    rng: StdRng,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    timer: CountdownTimer,
    timer_rx: mpsc::UnboundedReceiver<TimerEvent>,
    answer_tx: mpsc::UnboundedSender<ComputerAnswer>,
    answer_rx: mpsc::UnboundedReceiver<ComputerAnswer>,
}

impl SessionWorker {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        state: GameState,
        config: GameConfig,
        settings: SessionSettings,
        oracle: WordOracle,
        profiles: ProfileRepository,
        rng: StdRng,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            "SessionWorker initialized with seed word {:?}, {} coins, score {}-{}",
            state.current_word, state.wallet.coins, state.score.player, state.score.computer
        );

        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let (answer_tx, answer_rx) = mpsc::unbounded_channel();

        Self {
            state,
            config,
            settings,
            oracle,
            profiles,
            rng,
            command_rx,
            event_bus,
            timer: CountdownTimer::new(timer_tx),
            timer_rx,
            answer_tx,
            answer_rx,
        }
    }

    /// Main worker loop. Ends once every handle is dropped.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                Some(event) = self.timer_rx.recv() => self.handle_timer(event),
                Some(answer) = self.answer_rx.recv() => self.handle_answer(answer),
            }
        }

        self.timer.stop();
        info!("SessionWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Start { reply } => {
                let next = engine::start(&self.state);
                self.apply(next);
                self.reply(reply, "Start");
            }
            Command::SubmitWord { word, reply } => {
                let result = self.handle_submit(word);
                if reply.send(result).is_err() {
                    debug!("SubmitWord reply channel closed (caller dropped)");
                }
            }
            Command::ResetRound { reply } => {
                let next = engine::reset_round(&self.state, &self.config, &mut self.rng);
                self.apply(next);
                self.reply(reply, "ResetRound");
            }
            Command::PurchasePowerUp { id, reply } => {
                let result = self.handle_purchase(&id);
                if reply.send(result).is_err() {
                    debug!("PurchasePowerUp reply channel closed (caller dropped)");
                }
            }
            Command::ActivatePowerUp { id, reply } => {
                let result = self.handle_activation(&id);
                if reply.send(result).is_err() {
                    debug!("ActivatePowerUp reply channel closed (caller dropped)");
                }
            }
            Command::ConsumeSkipTurn { reply } => {
                self.skip_turn();
                self.reply(reply, "ConsumeSkipTurn");
            }
            Command::SetDifficulty { difficulty, reply } => {
                let next = engine::set_difficulty(&self.state, difficulty);
                self.apply(next);
                self.reply(reply, "SetDifficulty");
            }
            Command::ClearError { reply } => {
                let next = engine::clear_error(&self.state);
                self.apply(next);
                self.reply(reply, "ClearError");
            }
            Command::QueryState { reply } => self.reply(reply, "QueryState"),
        }
    }

    fn reply(&self, reply: oneshot::Sender<GameState>, command: &str) {
        if reply.send(self.state.clone()).is_err() {
            debug!("{command} reply channel closed (caller dropped)");
        }
    }

    fn handle_submit(&mut self, word: String) -> Result<GameState> {
        match engine::submit_word(&self.state, &word, Player::Human) {
            Ok(next) => {
                self.event_bus.publish(GameEvent::WordAccepted {
                    player: Player::Human,
                    word: next.current_word.clone(),
                    tag: self.state.turn_tag(),
                });
                self.apply(next);
                Ok(self.state.clone())
            }
            Err(SubmitError::Invalid(error)) => {
                info!(
                    %word,
                    %error,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "Rejected human word"
                );
                self.event_bus.publish(GameEvent::WordRejected {
                    player: Player::Human,
                    word,
                    reason: error.to_string(),
                });
                let next = engine::reject_word(&self.state, Player::Human, &error, &self.config);
                self.apply(next);
                Err(SubmitError::Invalid(error).into())
            }
            Err(error) => {
                debug!(
                    %word,
                    %error,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "Refused submission"
                );
                Err(error.into())
            }
        }
    }

    fn handle_purchase(&mut self, id: &str) -> Result<GameState> {
        let item = ledger::find_in_catalog(id).ok_or_else(|| RuntimeError::UnknownPowerUp {
            id: id.to_string(),
        })?;
        let next = ledger::purchase_power_up(&self.state, item).inspect_err(|error| {
            debug!(
                id,
                %error,
                code = error.error_code(),
                severity = error.severity().as_str(),
                "Purchase refused"
            );
        })?;
        info!(id, coins = next.wallet.coins, "Purchased power-up");
        self.apply(next);
        Ok(self.state.clone())
    }

    fn handle_activation(&mut self, id: &str) -> Result<GameState> {
        let next = ledger::activate_power_up(&self.state, id).inspect_err(|error| {
            debug!(
                id,
                %error,
                code = error.error_code(),
                severity = error.severity().as_str(),
                "Activation refused"
            );
        })?;
        info!(id, time_left = next.time_left, "Activated power-up");
        // time_left may have grown without a turn change; the restart in
        // `schedule` invalidates anything the old countdown already queued
        self.timer.stop();
        self.apply(next);
        Ok(self.state.clone())
    }

    fn skip_turn(&mut self) {
        if !ledger::can_skip_turn(&self.state) {
            return;
        }
        let next = ledger::consume_skip_turn(&self.state);
        self.event_bus.publish(GameEvent::TurnSkipped {
            tag: next.turn_tag(),
        });
        self.apply(next);
    }

    fn handle_timer(&mut self, event: TimerEvent) {
        if !self.timer.is_current(event.generation()) {
            debug!(generation = event.generation(), "Discarding superseded timer event");
            return;
        }

        match event {
            TimerEvent::Tick { tag, remaining, .. } => {
                if !self.is_current_human_turn(tag) {
                    debug!(%tag, "Discarding stale timer tick");
                    return;
                }
                self.state = engine::sync_time_left(&self.state, remaining);
                self.event_bus.publish(GameEvent::TimerTick { tag, remaining });
            }
            TimerEvent::Expired { tag, .. } => {
                if !self.is_current_human_turn(tag) {
                    debug!(%tag, "Discarding stale timer expiry");
                    return;
                }
                info!(%tag, "Turn timed out");
                self.event_bus.publish(GameEvent::TimerTick { tag, remaining: 0 });
                let expired = engine::sync_time_left(&self.state, 0);
                let next = engine::time_up(&expired, &self.config);
                self.apply(next);
            }
        }
    }

    fn is_current_human_turn(&self, tag: TurnTag) -> bool {
        self.state.is_turn_of(Player::Human) && self.state.turn_tag() == tag
    }

    fn handle_answer(&mut self, ComputerAnswer { tag, answer }: ComputerAnswer) {
        let current = self.state.is_turn_of(Player::Computer)
            && self.state.is_loading
            && self.state.turn_tag() == tag;
        if !current {
            debug!(%tag, "Discarding stale computer answer");
            return;
        }

        let (next, outcome) = engine::resolve_computer_turn(&self.state, answer, &self.config);
        match outcome {
            ComputerMove::Played { word } => {
                debug!(%word, "Computer played");
                self.event_bus.publish(GameEvent::WordAccepted {
                    player: Player::Computer,
                    word,
                    tag,
                });
            }
            ComputerMove::Rejected { word, error } => {
                info!(
                    %word,
                    %error,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "Computer word rejected"
                );
                self.event_bus.publish(GameEvent::WordRejected {
                    player: Player::Computer,
                    word,
                    reason: error.to_string(),
                });
            }
            ComputerMove::Failed(failure) => {
                warn!(%failure, "Computer failed to produce a word");
            }
            ComputerMove::Stale => return,
        }
        self.apply(next);
    }

    fn begin_computer_turn(&mut self) {
        if ledger::can_skip_turn(&self.state) {
            info!("Skip-turn active, computer's turn passes");
            self.skip_turn();
            return;
        }

        let next = engine::begin_computer_turn(&self.state);
        let tag = next.turn_tag();
        let request = WordRequest::from_state(&next);
        self.event_bus.publish(GameEvent::ComputerThinking { tag });
        self.apply(next);

        let oracle = self.oracle.clone();
        let answers = self.answer_tx.clone();
        let delay = self.settings.computer_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let answer = fetch_computer_word(&oracle, request).await;
            if answers.send(ComputerAnswer { tag, answer }).is_err() {
                debug!(%tag, "Session gone before computer answered");
            }
        });
    }

    /// Replaces the state, then persists, notifies and schedules whatever the
    /// new state calls for (timer, computer turn).
    fn apply(&mut self, next: GameState) {
        let previous = std::mem::replace(&mut self.state, next);

        self.profiles
            .persist_changes(&previous.profile(), &self.state.profile());

        if previous.status == GameStatus::Playing && self.state.status == GameStatus::GameOver {
            let winner = if self.state.score.player > previous.score.player {
                Player::Human
            } else {
                Player::Computer
            };
            info!(%winner, score = ?self.state.score, "Round ended");
            self.event_bus.publish(GameEvent::RoundEnded {
                winner,
                score: self.state.score,
            });
        }

        self.event_bus
            .publish(GameEvent::StateChanged(Box::new(self.state.clone())));

        self.schedule();
    }

    fn schedule(&mut self) {
        if self.state.is_turn_of(Player::Human) {
            let tag = self.state.turn_tag();
            if self.timer.running_for() != Some(tag) {
                self.timer.restart(tag, self.state.time_left);
            }
        } else {
            self.timer.stop();
        }

        if self.state.is_turn_of(Player::Computer) && !self.state.is_loading {
            self.begin_computer_turn();
        }
    }
}
