//! Worker tasks that back the runtime orchestration.
//!
//! The session worker applies every transition; the countdown timer ticks
//! the human's turn and reports back to it.

mod session;
mod timer;

pub use session::{Command, SessionSettings, SessionWorker};
pub use timer::{CountdownTimer, TimerEvent};
