//! Move outcomes: the closed vocabulary of validator and draw decisions.
//!
//! Every decision the engine makes, acceptance or rejection plus the side
//! effects worth scoring, is reported as an `Outcome`. Callers branch on
//! outcomes; nothing about an illegal move is an error. The enum is closed
//! so the reward table can be a fixed-size array with compile-time
//! exhaustiveness instead of a string-keyed map.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One validator or draw-engine decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    // === Successful moves ===
    /// A run landed on a non-empty tableau pile.
    SuccessfulTableauMove,
    /// A king-bottomed run landed on an empty tableau pile.
    SuccessfulTableauMoveKing,
    /// A card continued a foundation's ascending run.
    SuccessfulFoundationMove,
    /// An ace opened an empty foundation.
    AceToFoundation,
    /// A tableau move exposed a face-down card, now flipped.
    RevealHiddenCard,
    /// All 52 cards reached the foundations.
    GameComplete,

    // === Draw engine ===
    /// Cards were turned over from the stock into the next-cards buffer.
    DealtNextCards,
    /// The exhausted stock was rebuilt from the waste pile.
    RecyclingWastePile,
    /// The stock was rebuilt from a *smaller* waste pile than last time:
    /// the same residual cards are being cycled without progress.
    RecycleWastePileAndUsedCards,
    /// Stock, waste, and next-cards are all empty; nothing to deal.
    NoCardsToDeal,

    // === Rejected moves ===
    /// The source holds fewer cards than requested, or a single-card source
    /// was asked for more than one.
    RequestedTooManyCards,
    /// Part of the requested run is still face-down.
    CardsNotMovable,
    /// Foundation move with the wrong count or a non-consecutive rank.
    InvalidFoundationMoveNumber,
    /// Foundations cannot feed other foundations.
    InvalidFoundationMoveFoundation,
    /// The card's suit does not match the foundation's bound suit.
    InvalidFoundationMoveSuit,
    /// Only an ace may open an empty foundation.
    InvalidFoundationMoveAce,
    /// Tableau move without color alternation.
    InvalidTableauMoveColor,
    /// Tableau move without the descending-by-one rank step.
    InvalidTableauMoveNumber,
    /// Only a king may land on an empty tableau pile.
    InvalidTableauMoveKing,
}

impl Outcome {
    /// Every outcome, in table order.
    pub const ALL: [Outcome; Outcome::COUNT] = [
        Outcome::SuccessfulTableauMove,
        Outcome::SuccessfulTableauMoveKing,
        Outcome::SuccessfulFoundationMove,
        Outcome::AceToFoundation,
        Outcome::RevealHiddenCard,
        Outcome::GameComplete,
        Outcome::DealtNextCards,
        Outcome::RecyclingWastePile,
        Outcome::RecycleWastePileAndUsedCards,
        Outcome::NoCardsToDeal,
        Outcome::RequestedTooManyCards,
        Outcome::CardsNotMovable,
        Outcome::InvalidFoundationMoveNumber,
        Outcome::InvalidFoundationMoveFoundation,
        Outcome::InvalidFoundationMoveSuit,
        Outcome::InvalidFoundationMoveAce,
        Outcome::InvalidTableauMoveColor,
        Outcome::InvalidTableauMoveNumber,
        Outcome::InvalidTableauMoveKing,
    ];

    /// Number of outcome kinds.
    pub const COUNT: usize = 19;

    /// Stable index into the reward table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The snake_case key, as used in reward-table JSON overrides.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Outcome::SuccessfulTableauMove => "successful_tableau_move",
            Outcome::SuccessfulTableauMoveKing => "successful_tableau_move_king",
            Outcome::SuccessfulFoundationMove => "successful_foundation_move",
            Outcome::AceToFoundation => "ace_to_foundation",
            Outcome::RevealHiddenCard => "reveal_hidden_card",
            Outcome::GameComplete => "game_complete",
            Outcome::DealtNextCards => "dealt_next_cards",
            Outcome::RecyclingWastePile => "recycling_waste_pile",
            Outcome::RecycleWastePileAndUsedCards => "recycle_waste_pile_and_used_cards",
            Outcome::NoCardsToDeal => "no_cards_to_deal",
            Outcome::RequestedTooManyCards => "requested_too_many_cards",
            Outcome::CardsNotMovable => "cards_not_movable",
            Outcome::InvalidFoundationMoveNumber => "invalid_foundation_move_number",
            Outcome::InvalidFoundationMoveFoundation => "invalid_foundation_move_foundation",
            Outcome::InvalidFoundationMoveSuit => "invalid_foundation_move_suit",
            Outcome::InvalidFoundationMoveAce => "invalid_foundation_move_ace",
            Outcome::InvalidTableauMoveColor => "invalid_tableau_move_color",
            Outcome::InvalidTableauMoveNumber => "invalid_tableau_move_number",
            Outcome::InvalidTableauMoveKing => "invalid_tableau_move_king",
        }
    }

    /// Did this outcome come from an accepted move or a productive draw?
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(
            self,
            Outcome::SuccessfulTableauMove
                | Outcome::SuccessfulTableauMoveKing
                | Outcome::SuccessfulFoundationMove
                | Outcome::AceToFoundation
                | Outcome::RevealHiddenCard
                | Outcome::GameComplete
                | Outcome::DealtNextCards
                | Outcome::RecyclingWastePile
                | Outcome::RecycleWastePileAndUsedCards
        )
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Outcome list for a single operation.
///
/// A rejected move yields exactly one outcome; a successful move may yield
/// up to three (move, reveal bonus, completion).
pub type Outcomes = SmallVec<[Outcome; 3]>;

/// Result of an `attempt_move` or `advance_draw`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Did the operation mutate the game?
    pub applied: bool,

    /// Every decision made, in emission order.
    pub outcomes: Outcomes,

    /// Summed reward points for `outcomes`. Only applied operations
    /// accumulate into the running score; rejections report their penalty
    /// here without touching it.
    pub score_delta: i64,
}

impl MoveOutcome {
    /// Build an applied outcome.
    #[must_use]
    pub(crate) fn applied(outcomes: Outcomes, score_delta: i64) -> Self {
        Self {
            applied: true,
            outcomes,
            score_delta,
        }
    }

    /// Build a rejection carrying a single outcome.
    #[must_use]
    pub(crate) fn rejected(outcome: Outcome, score_delta: i64) -> Self {
        Self {
            applied: false,
            outcomes: SmallVec::from_slice(&[outcome]),
            score_delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_exhaustive_and_ordered() {
        assert_eq!(Outcome::ALL.len(), Outcome::COUNT);
        for (i, outcome) in Outcome::ALL.iter().enumerate() {
            assert_eq!(outcome.index(), i);
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = Outcome::ALL.iter().map(|o| o.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Outcome::COUNT);
    }

    #[test]
    fn test_serde_matches_key() {
        for outcome in Outcome::ALL {
            let json = serde_json::to_string(&outcome).unwrap();
            assert_eq!(json, format!("\"{}\"", outcome.key()));

            let back: Outcome = serde_json::from_str(&json).unwrap();
            assert_eq!(back, outcome);
        }
    }

    #[test]
    fn test_success_split() {
        assert!(Outcome::AceToFoundation.is_success());
        assert!(Outcome::RevealHiddenCard.is_success());
        assert!(Outcome::RecyclingWastePile.is_success());
        assert!(!Outcome::NoCardsToDeal.is_success());
        assert!(!Outcome::RequestedTooManyCards.is_success());
        assert!(!Outcome::InvalidTableauMoveKing.is_success());
    }

    #[test]
    fn test_move_outcome_constructors() {
        let rejected = MoveOutcome::rejected(Outcome::CardsNotMovable, -5);
        assert!(!rejected.applied);
        assert_eq!(rejected.outcomes.as_slice(), &[Outcome::CardsNotMovable]);
        assert_eq!(rejected.score_delta, -5);

        let applied = MoveOutcome::applied(
            SmallVec::from_slice(&[Outcome::SuccessfulTableauMove, Outcome::RevealHiddenCard]),
            20,
        );
        assert!(applied.applied);
        assert_eq!(applied.outcomes.len(), 2);
    }
}
