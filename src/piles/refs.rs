//! Pile references: the closed vocabulary callers use to address piles.
//!
//! A `PileRef` is a tagged variant, not a string tag, so the validator can
//! match on it exhaustively. Tableau indices are range-checked when a
//! reference is resolved against a board; an out-of-range index is a caller
//! error (`EngineError::InvalidReference`), never a panic.

use serde::{Deserialize, Serialize};

use crate::core::card::Suit;

/// Number of tableau piles on the board.
pub const N_TABLEAU: usize = 7;

/// Reference to one of the thirteen piles on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PileRef {
    /// The face-down draw pile.
    Stock,
    /// One of the seven main piles, indexed `0..7`.
    Tableau(u8),
    /// The ascending suit pile for the given suit.
    Foundation(Suit),
    /// Face-up cards already cycled past the next-cards buffer.
    Waste,
    /// The face-up cards most recently drawn from the stock.
    NextCards,
}

impl PileRef {
    /// Is this a tableau reference (of any index, in range or not)?
    #[must_use]
    pub const fn is_tableau(self) -> bool {
        matches!(self, PileRef::Tableau(_))
    }

    /// Is this a foundation reference?
    #[must_use]
    pub const fn is_foundation(self) -> bool {
        matches!(self, PileRef::Foundation(_))
    }

    /// Can a move draw cards *from* this pile?
    ///
    /// The stock is consumed through the draw engine, never through moves.
    #[must_use]
    pub const fn is_move_source(self) -> bool {
        matches!(
            self,
            PileRef::Tableau(_) | PileRef::Foundation(_) | PileRef::Waste | PileRef::NextCards
        )
    }

    /// Can a move place cards *onto* this pile?
    #[must_use]
    pub const fn is_move_destination(self) -> bool {
        matches!(self, PileRef::Tableau(_) | PileRef::Foundation(_))
    }

    /// Is a source of this kind restricted to single-card moves?
    ///
    /// Only the top card of the waste or next-cards buffer is playable.
    #[must_use]
    pub const fn is_single_card_source(self) -> bool {
        matches!(self, PileRef::Waste | PileRef::NextCards)
    }
}

impl std::fmt::Display for PileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileRef::Stock => write!(f, "stock"),
            PileRef::Tableau(i) => write!(f, "tableau {i}"),
            PileRef::Foundation(suit) => write!(f, "foundation {suit}"),
            PileRef::Waste => write!(f, "waste"),
            PileRef::NextCards => write!(f, "next cards"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_endpoints() {
        assert!(PileRef::Tableau(0).is_move_source());
        assert!(PileRef::Foundation(Suit::Hearts).is_move_source());
        assert!(PileRef::Waste.is_move_source());
        assert!(PileRef::NextCards.is_move_source());
        assert!(!PileRef::Stock.is_move_source());

        assert!(PileRef::Tableau(6).is_move_destination());
        assert!(PileRef::Foundation(Suit::Spades).is_move_destination());
        assert!(!PileRef::Stock.is_move_destination());
        assert!(!PileRef::Waste.is_move_destination());
        assert!(!PileRef::NextCards.is_move_destination());
    }

    #[test]
    fn test_single_card_sources() {
        assert!(PileRef::Waste.is_single_card_source());
        assert!(PileRef::NextCards.is_single_card_source());
        assert!(!PileRef::Tableau(0).is_single_card_source());
        assert!(!PileRef::Foundation(Suit::Clubs).is_single_card_source());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PileRef::Tableau(3)), "tableau 3");
        assert_eq!(format!("{}", PileRef::Stock), "stock");
        assert_eq!(
            format!("{}", PileRef::Foundation(Suit::Hearts)),
            "foundation \u{2665}"
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        for r in [
            PileRef::Stock,
            PileRef::Tableau(4),
            PileRef::Foundation(Suit::Diamonds),
            PileRef::Waste,
            PileRef::NextCards,
        ] {
            let json = serde_json::to_string(&r).unwrap();
            let back: PileRef = serde_json::from_str(&json).unwrap();
            assert_eq!(r, back);
        }
    }
}
