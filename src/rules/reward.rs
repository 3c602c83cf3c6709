//! The reward table: points and a display message for every outcome.
//!
//! The table is a fixed-size array indexed by `Outcome`, built once at game
//! construction and read-only during play. Callers may override individual
//! rows with a JSON object keyed by the snake_case outcome names:
//!
//! ```
//! use klondike_engine::rules::{Outcome, RewardTable};
//!
//! let table = RewardTable::standard()
//!     .with_json_overrides(r#"{"game_complete": {"points": 500}}"#)
//!     .unwrap();
//! assert_eq!(table.points(Outcome::GameComplete), 500);
//! ```
//!
//! Unknown keys are rejected at construction; a running game never sees a
//! malformed table.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::core::error::EngineError;
use super::outcome::Outcome;

/// Points and message for one outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardEntry {
    /// Score delta.
    pub points: i64,
    /// Human-readable description, suitable for a CLI shell.
    pub message: String,
}

/// A single override row in reward JSON. `message` is optional.
#[derive(Debug, Deserialize)]
struct RewardOverride {
    points: i64,
    #[serde(default)]
    message: Option<String>,
}

/// Read-only points/message table covering every `Outcome`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardTable {
    entries: [RewardEntry; Outcome::COUNT],
}

impl Default for RewardTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RewardTable {
    /// The built-in table.
    ///
    /// Foundation progress and reveals score highest, plain tableau moves
    /// low, draws zero, unproductive cycling negative. Rejections carry a
    /// flat penalty.
    #[must_use]
    pub fn standard() -> Self {
        let entry = |outcome: Outcome| {
            let (points, message) = match outcome {
                Outcome::SuccessfulTableauMove => (5, "Cards moved to tableau stack."),
                Outcome::SuccessfulTableauMoveKing => (10, "King moved to empty tableau stack."),
                Outcome::SuccessfulFoundationMove => (15, "Card moved to foundation."),
                Outcome::AceToFoundation => (20, "Ace moved to new foundation pile."),
                Outcome::RevealHiddenCard => (15, "Hidden card revealed."),
                Outcome::GameComplete => (100, "Game complete."),
                Outcome::DealtNextCards => (0, "Dealt next cards."),
                Outcome::RecyclingWastePile => (-5, "Recycling waste pile."),
                Outcome::RecycleWastePileAndUsedCards => {
                    (-20, "Recycling waste pile without progress.")
                }
                Outcome::NoCardsToDeal => (-10, "No more cards to deal."),
                Outcome::RequestedTooManyCards => (-5, "Not enough movable cards."),
                Outcome::CardsNotMovable => (-5, "Selected cards are not visible."),
                Outcome::InvalidFoundationMoveNumber => {
                    (-5, "Card does not continue the foundation.")
                }
                Outcome::InvalidFoundationMoveFoundation => {
                    (-5, "Cannot move between foundations.")
                }
                Outcome::InvalidFoundationMoveSuit => (-5, "Wrong suit for this foundation."),
                Outcome::InvalidFoundationMoveAce => (-5, "Only an ace starts a foundation."),
                Outcome::InvalidTableauMoveColor => (-5, "Wrong color."),
                Outcome::InvalidTableauMoveNumber => (-5, "Wrong number sequence."),
                Outcome::InvalidTableauMoveKing => (-5, "Only a king fits an empty stack."),
            };
            RewardEntry {
                points,
                message: message.to_string(),
            }
        };
        Self {
            entries: Outcome::ALL.map(entry),
        }
    }

    /// Build a table from standard values plus JSON overrides.
    ///
    /// The JSON is an object mapping outcome keys to `{points, message?}`.
    /// Unknown keys or malformed JSON yield `InvalidRewardTable`.
    pub fn with_json_overrides(mut self, json: &str) -> Result<Self, EngineError> {
        let overrides: FxHashMap<String, RewardOverride> = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidRewardTable(e.to_string()))?;

        for (key, row) in overrides {
            let outcome = Outcome::ALL
                .into_iter()
                .find(|o| o.key() == key)
                .ok_or_else(|| {
                    EngineError::InvalidRewardTable(format!("unknown outcome key `{key}`"))
                })?;
            let entry = &mut self.entries[outcome.index()];
            entry.points = row.points;
            if let Some(message) = row.message {
                entry.message = message;
            }
        }
        Ok(self)
    }

    /// Replace one row.
    pub fn set(&mut self, outcome: Outcome, points: i64, message: impl Into<String>) {
        self.entries[outcome.index()] = RewardEntry {
            points,
            message: message.into(),
        };
    }

    /// Points for one outcome.
    #[must_use]
    pub fn points(&self, outcome: Outcome) -> i64 {
        self.entries[outcome.index()].points
    }

    /// Message for one outcome.
    #[must_use]
    pub fn message(&self, outcome: Outcome) -> &str {
        &self.entries[outcome.index()].message
    }

    /// Summed points over an outcome sequence.
    #[must_use]
    pub fn score(&self, outcomes: &[Outcome]) -> i64 {
        outcomes.iter().map(|&o| self.points(o)).sum()
    }

    /// Messages for an outcome sequence, in order.
    #[must_use]
    pub fn messages(&self, outcomes: &[Outcome]) -> Vec<&str> {
        outcomes.iter().map(|&o| self.message(o)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_covers_every_outcome() {
        let table = RewardTable::standard();
        for outcome in Outcome::ALL {
            assert!(!table.message(outcome).is_empty(), "{outcome} has no message");
        }
    }

    #[test]
    fn test_success_outcomes_score_at_least_failures() {
        let table = RewardTable::standard();
        assert!(table.points(Outcome::AceToFoundation) > 0);
        assert!(table.points(Outcome::SuccessfulFoundationMove) > 0);
        assert!(table.points(Outcome::RequestedTooManyCards) < 0);
    }

    #[test]
    fn test_score_sums() {
        let table = RewardTable::standard();
        let outcomes = [Outcome::SuccessfulFoundationMove, Outcome::RevealHiddenCard];
        assert_eq!(
            table.score(&outcomes),
            table.points(Outcome::SuccessfulFoundationMove)
                + table.points(Outcome::RevealHiddenCard)
        );
    }

    #[test]
    fn test_json_overrides() {
        let table = RewardTable::standard()
            .with_json_overrides(
                r#"{
                    "successful_foundation_move": {"points": 42, "message": "Nice."},
                    "no_cards_to_deal": {"points": -1}
                }"#,
            )
            .unwrap();

        assert_eq!(table.points(Outcome::SuccessfulFoundationMove), 42);
        assert_eq!(table.message(Outcome::SuccessfulFoundationMove), "Nice.");
        assert_eq!(table.points(Outcome::NoCardsToDeal), -1);
        // Message untouched when override omits it
        assert_eq!(table.message(Outcome::NoCardsToDeal), "No more cards to deal.");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = RewardTable::standard()
            .with_json_overrides(r#"{"not_an_outcome": {"points": 1}}"#)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidRewardTable(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = RewardTable::standard()
            .with_json_overrides("{oops")
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidRewardTable(_)));
    }

    #[test]
    fn test_set_replaces_row() {
        let mut table = RewardTable::standard();
        table.set(Outcome::GameComplete, 1000, "Flawless.");
        assert_eq!(table.points(Outcome::GameComplete), 1000);
        assert_eq!(table.message(Outcome::GameComplete), "Flawless.");
    }
}
