//! The pile container: an ordered sequence of cards.
//!
//! `Pile` is a dumb container: it knows how to add, remove, peek, and
//! split, but nothing about legality. All game rules live in the validator.
//!
//! ## Orientation
//!
//! Index 0 is the bottom; the last element is the top, where play happens
//! for tableau, foundation, and waste piles. The stock and the next-cards
//! buffer are consumed from the **front**, reflecting deal order.
//!
//! ## Why `im::Vector`
//!
//! Piles are persistent vectors, so cloning a pile (and therefore
//! snapshotting a whole board for undo) is O(1) structural sharing rather
//! than a deep copy.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::card::Card;

/// An ordered pile of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile from an existing card sequence.
    #[must_use]
    pub fn from_cards(cards: Vector<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the pile empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card (last element), if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// Card at `index` (0 = bottom).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> {
        self.cards.iter()
    }

    /// Place a card on top.
    pub fn push_top(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove and return the top card.
    pub fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Remove and return the front card (deal order; stock/next-cards only).
    pub fn draw_front(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Split off the top `count` cards, preserving their relative order.
    ///
    /// Panics if the pile holds fewer than `count` cards; callers validate
    /// counts before splitting.
    #[must_use]
    pub fn take_top(&mut self, count: usize) -> Vector<Card> {
        assert!(
            count <= self.cards.len(),
            "take_top({count}) from pile of {}",
            self.cards.len()
        );
        self.cards.split_off(self.cards.len() - count)
    }

    /// Remove and return every card, preserving order.
    #[must_use]
    pub fn take_all(&mut self) -> Vector<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Append a run of cards on top, preserving their relative order.
    pub fn append(&mut self, run: Vector<Card>) {
        self.cards.append(run);
    }

    /// Flip the top card face-up. Returns true if a card was flipped.
    pub fn flip_top_up(&mut self) -> bool {
        let Some(card) = self.cards.back().copied() else {
            return false;
        };
        if card.face_up {
            return false;
        }
        self.cards.set(
            self.cards.len() - 1,
            Card {
                face_up: true,
                ..card
            },
        );
        true
    }

    /// Length of the contiguous face-up run at the top of the pile.
    ///
    /// ```
    /// use im::vector;
    /// use klondike_engine::core::{Card, Suit};
    /// use klondike_engine::piles::Pile;
    ///
    /// let pile = Pile::from_cards(vector![
    ///     Card::new(Suit::Clubs, 9),
    ///     Card::face_up(Suit::Hearts, 8),
    ///     Card::face_up(Suit::Spades, 7),
    /// ]);
    /// assert_eq!(pile.face_up_run_len(), 2);
    /// ```
    #[must_use]
    pub fn face_up_run_len(&self) -> usize {
        self.cards.iter().rev().take_while(|c| c.face_up).count()
    }

    /// The underlying card sequence.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }
}
