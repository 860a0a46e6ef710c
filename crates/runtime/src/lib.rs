//! Async orchestration for a word-chain game session.
//!
//! This crate wires the word oracle, the key-value repositories, and worker
//! tasks into a runtime API. Consumers embed [`Runtime`] to play a session,
//! subscribe to events, and issue player operations through
//! [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] broadcasts session events
//! - [`oracle`] produces the computer's words
//! - [`repository`] persists the player profile
//! - [`session`] composes a computer turn outside the worker
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod oracle;
pub mod repository;
pub mod runtime;
pub mod session;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{EventBus, GameEvent};
pub use oracle::{
    GeminiConfig, GeminiGenerator, OracleConfig, OracleError, WordGenerator, WordOracle,
    WordRequest,
};
pub use repository::{
    FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, KeyValueStoreExt, ProfileRepository,
    RepositoryError,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use session::handle_computer_turn;
