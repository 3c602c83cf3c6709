//! Card identity: suit, rank, and the face-up flag.
//!
//! A `Card` is a value type. Its suit and rank never change; only the
//! face-up flag is mutated as cards are revealed during play. Color is a
//! pure function of suit (hearts/diamonds red, spades/clubs black), so it
//! is derived, never stored.
//!
//! ## Ranks
//!
//! Ranks are `1..=13` with ace low:
//!
//! ```
//! use klondike_engine::core::{ACE, KING};
//!
//! assert_eq!(ACE, 1);
//! assert_eq!(KING, 13);
//! ```

use serde::{Deserialize, Serialize};

/// Rank of a card, `1..=13` (ace low, king high).
pub type Rank = u8;

/// Lowest rank; the only rank accepted by an empty foundation.
pub const ACE: Rank = 1;

/// Highest rank; the only rank accepted by an empty tableau pile.
pub const KING: Rank = 13;

/// Number of suits in a deck.
pub const N_SUITS: usize = 4;

/// Number of ranks per suit.
pub const N_RANKS: usize = 13;

/// Total cards in a deck.
pub const N_CARDS: usize = N_SUITS * N_RANKS;

/// Card suit.
///
/// Discriminants are stable and used to index the foundation piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

/// Card color, derived from suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    /// All suits, in foundation-index order.
    pub const ALL: [Suit; N_SUITS] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Color of this suit.
    ///
    /// ```
    /// use klondike_engine::core::{Color, Suit};
    ///
    /// assert_eq!(Suit::Hearts.color(), Color::Red);
    /// assert_eq!(Suit::Clubs.color(), Color::Black);
    /// ```
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    /// Foundation index for this suit (0..4).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Suit::Spades => '\u{2660}',
            Suit::Hearts => '\u{2665}',
            Suit::Diamonds => '\u{2666}',
            Suit::Clubs => '\u{2663}',
        };
        write!(f, "{symbol}")
    }
}

/// A playing card.
///
/// Identity (suit, rank) is immutable; `face_up` flips as the card is
/// revealed. Exactly one `Card` per (suit, rank) exists in a game; cards
/// are moved between piles, never copied or recreated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Suit, fixed at creation.
    pub suit: Suit,

    /// Rank `1..=13`, fixed at creation.
    pub rank: Rank,

    /// Is the card currently showing its face?
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    ///
    /// Panics if `rank` is outside `1..=13`.
    #[must_use]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        assert!((ACE..=KING).contains(&rank), "Rank {rank} out of range");
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub fn face_up(suit: Suit, rank: Rank) -> Self {
        Self {
            face_up: true,
            ..Self::new(suit, rank)
        }
    }

    /// Color of this card.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Is this card an ace?
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank == ACE
    }

    /// Is this card a king?
    #[must_use]
    pub const fn is_king(self) -> bool {
        self.rank == KING
    }

    /// Do `self` and `other` have different colors?
    ///
    /// Tableau stacking compares colors, not suits.
    #[must_use]
    pub const fn alternates_with(self, other: Card) -> bool {
        !matches!(
            (self.color(), other.color()),
            (Color::Red, Color::Red) | (Color::Black, Color::Black)
        )
    }

    /// Would `self` sit directly on `other` in a descending tableau run?
    ///
    /// True when `other` ranks exactly one above `self`:
    ///
    /// ```
    /// use klondike_engine::core::{Card, Suit};
    ///
    /// let ten = Card::face_up(Suit::Hearts, 10);
    /// let jack = Card::face_up(Suit::Spades, 11);
    /// assert!(ten.ranks_under(jack));
    /// assert!(!jack.ranks_under(ten));
    /// ```
    #[must_use]
    pub const fn ranks_under(self, other: Card) -> bool {
        other.rank == self.rank + 1
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rank = match self.rank {
            ACE => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            KING => "K".to_string(),
            n => n.to_string(),
        };
        write!(f, "{}{}", rank, self.suit)
    }
}
