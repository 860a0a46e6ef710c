//! Unified error types surfaced by the runtime API.
//!
//! Wraps engine and ledger rejections plus worker coordination failures so
//! frontends can report them with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{EconomyError, ErrorSeverity, GameError, SubmitError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error(transparent)]
    Economy(#[from] EconomyError),

    #[error("unknown power-up {id:?}")]
    UnknownPowerUp { id: String },

    #[error("invalid runtime configuration: {0}")]
    InvalidConfig(String),
}

impl RuntimeError {
    /// Severity of a gameplay rejection; `None` for infrastructure failures.
    pub fn severity(&self) -> Option<ErrorSeverity> {
        match self {
            Self::Submit(error) => Some(error.severity()),
            Self::Economy(error) => Some(error.severity()),
            Self::UnknownPowerUp { .. } => Some(ErrorSeverity::Recoverable),
            Self::CommandChannelClosed
            | Self::ReplyChannelClosed(_)
            | Self::WorkerJoin(_)
            | Self::InvalidConfig(_) => None,
        }
    }
}
