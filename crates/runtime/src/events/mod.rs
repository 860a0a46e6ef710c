//! Session events broadcast to frontends.
mod bus;
mod types;

pub use bus::EventBus;
pub use types::GameEvent;
