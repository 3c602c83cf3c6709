//! Engine errors: structural misuse and bad configuration.
//!
//! Illegal *moves* are not errors; they are [`Outcome`](crate::rules::Outcome)
//! values the caller branches on. `EngineError` covers the other two classes
//! from the error-handling design:
//!
//! - `InvalidReference`: a caller addressed a pile that cannot take part in
//!   the requested operation (out-of-range tableau index, moving onto the
//!   stock, source and destination the same pile).
//! - `InvalidConfig` / `InvalidRewardTable`: construction-time failures;
//!   fatal to building a game, never to a game in progress.
//!
//! Internal invariant violations (card conservation) are programming errors
//! and assert loudly instead of being reported here.

use crate::piles::PileRef;

/// Error raised for structural misuse or invalid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// A pile reference cannot take part in the requested operation.
    InvalidReference {
        /// The offending reference.
        reference: PileRef,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// `cards_per_turn` must be at least 1.
    InvalidConfig(String),

    /// The reward-table override could not be parsed or named unknown keys.
    InvalidRewardTable(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidReference { reference, reason } => {
                write!(f, "invalid reference to {reference}: {reason}")
            }
            EngineError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            EngineError::InvalidRewardTable(msg) => write!(f, "invalid reward table: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}
