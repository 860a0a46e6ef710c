//! High-level runtime orchestrator.
//!
//! The runtime owns the session worker, wires up command/event channels, and
//! exposes a builder-based API for frontends to drive a game.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use game_core::ledger::{self, RewardKind};
use game_core::{GameConfig, GameState, engine};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::{EventBus, GameEvent};
use crate::oracle::{OracleConfig, WordGenerator, WordOracle};
use crate::repository::{InMemoryKeyValueStore, KeyValueStore, ProfileRepository};
use crate::workers::{Command, SessionSettings, SessionWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub oracle: OracleConfig,
    /// Pause before each computer turn.
    pub computer_delay: Duration,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Seed for word picks; `None` draws from entropy.
    pub rng_seed: Option<u64>,
    /// Pay the daily-login reward when the session starts on a new day.
    pub daily_login: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            oracle: OracleConfig::default(),
            computer_delay: Duration::from_millis(1_000),
            event_buffer_size: 100,
            command_buffer_size: 32,
            rng_seed: None,
            daily_login: true,
        }
    }
}

/// Main runtime that orchestrates a game session
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    session_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to game events
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.handle.subscribe()
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once every outstanding handle clone has been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.session_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    store: Option<Arc<dyn KeyValueStore>>,
    generator: Option<Arc<dyn WordGenerator>>,
    today: Option<NaiveDate>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            store: None,
            generator: None,
            today: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Persist the profile in `store`. Defaults to an in-memory store.
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Generate computer words with `generator`. Without one, every computer
    /// word comes from the fallback list.
    pub fn generator(mut self, generator: Arc<dyn WordGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Pin the date used for the daily-login check.
    pub fn today(mut self, date: NaiveDate) -> Self {
        self.today = Some(date);
        self
    }

    /// Loads the profile, seeds the first round and spawns the session worker.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn build(self) -> Result<Runtime> {
        let RuntimeBuilder {
            config,
            store,
            generator,
            today,
        } = self;

        if config.game_config.time_limit == 0 {
            return Err(RuntimeError::InvalidConfig(
                "turn time limit must be at least one second".to_string(),
            ));
        }

        let store: Arc<dyn KeyValueStore> = match store {
            Some(store) => store,
            None => Arc::new(InMemoryKeyValueStore::new()),
        };
        let profiles = ProfileRepository::new(store);

        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut oracle = match generator {
            Some(generator) => WordOracle::new(generator, config.oracle.clone()),
            None => {
                tracing::warn!("No word generator configured, computer uses fallback words");
                WordOracle::fallback_only()
            }
        };
        if let Some(seed) = config.rng_seed {
            oracle = oracle.with_seed(seed);
        }

        let profile = profiles.load(config.game_config.starting_coins);
        let mut state = engine::initialize(&config.game_config, profile, &mut rng);

        if config.daily_login {
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            state = apply_daily_login(&state, &profiles, today);
        }

        let event_bus = EventBus::with_capacity(config.event_buffer_size);
        let (command_tx, command_rx) = mpsc::channel::<Command>(config.command_buffer_size);

        let worker = SessionWorker::new(
            state,
            config.game_config.clone(),
            SessionSettings {
                computer_delay: config.computer_delay,
            },
            oracle,
            profiles,
            rng,
            command_rx,
            event_bus.clone(),
        );
        let session_worker_handle = tokio::spawn(worker.run());

        Ok(Runtime {
            handle: RuntimeHandle::new(command_tx, event_bus),
            session_worker_handle,
        })
    }
}

/// Pays the daily-login reward once per calendar day.
fn apply_daily_login(
    state: &GameState,
    profiles: &ProfileRepository,
    today: NaiveDate,
) -> GameState {
    if profiles.last_login() == Some(today) {
        return state.clone();
    }

    let next = ledger::award_coins(state, RewardKind::DailyLogin, 1.0);
    tracing::info!(
        coins = next.wallet.coins - state.wallet.coins,
        "Daily login reward"
    );
    profiles.persist_changes(&state.profile(), &next.profile());
    profiles.record_login(today);
    next
}
