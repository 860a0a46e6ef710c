//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`ValidationError`, `SubmitError`, `EconomyError`)
//! live next to the rules that raise them. This module only provides the
//! shared classification the runtime uses to decide what a failure means for
//! the round in progress.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: a played word broke the chain rules; under this game's
///   rules the round is lost by whoever played it.
/// - **Recoverable**: the request was refused but the round is unaffected
///   (wrong turn, not enough coins, unknown power-up).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Validation,
    Recoverable,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Recoverable => "recoverable",
        }
    }

    /// Returns true if the error leaves the round in progress untouched.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if the error forfeits the round for the offending player.
    pub const fn ends_round(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - The `Display` text is what players see, keep it short
/// - Classify severity based on what happens to the round, not on impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// The runtime logs it as the `code` field when it refuses a request.
    fn error_code(&self) -> &'static str;
}
