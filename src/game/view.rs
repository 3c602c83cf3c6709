//! Read-only projection of a game.
//!
//! `GameView` is a plain serializable value: every pile's cards (suit,
//! rank, face-up flag), the score, and the completion flag. Frontends
//! render it; agents flatten it into observation tensors. It shares no
//! structure with the live game, so holding one across moves is safe.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, N_SUITS};
use crate::piles::{Pile, N_TABLEAU};

use super::board::Board;

/// Snapshot view of all piles and the score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The seven tableau piles, bottom to top.
    pub tableau: [Vec<Card>; N_TABLEAU],
    /// The four foundations in suit order, bottom to top.
    pub foundations: [Vec<Card>; N_SUITS],
    /// The stock, in draw order.
    pub stock: Vec<Card>,
    /// The waste pile, oldest first.
    pub waste: Vec<Card>,
    /// The next-cards buffer, playable card last.
    pub next_cards: Vec<Card>,
    /// Running score.
    pub score: i64,
    /// Are all 52 cards on the foundations?
    pub complete: bool,
}

fn cards_of(pile: &Pile) -> Vec<Card> {
    pile.iter().copied().collect()
}

impl GameView {
    pub(crate) fn project(board: &Board, score: i64) -> Self {
        Self {
            tableau: std::array::from_fn(|i| cards_of(board.tableau(i))),
            foundations: std::array::from_fn(|i| {
                cards_of(board.foundation(crate::core::card::Suit::ALL[i]))
            }),
            stock: cards_of(board.stock()),
            waste: cards_of(board.waste()),
            next_cards: cards_of(board.next_cards()),
            score,
            complete: board.is_complete(),
        }
    }

    /// Total cards across every pile in the view.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.tableau.iter().map(Vec::len).sum::<usize>()
            + self.foundations.iter().map(Vec::len).sum::<usize>()
            + self.stock.len()
            + self.waste.len()
            + self.next_cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Suit, N_CARDS};
    use crate::core::rng::GameRng;
    use crate::game::board::new_shuffled_stock;

    #[test]
    fn test_projection_covers_the_deck() {
        let mut rng = GameRng::new(42);
        let board = Board::deal(new_shuffled_stock(&mut rng), 3);

        let view = GameView::project(&board, 0);

        assert_eq!(view.total_cards(), N_CARDS);
        assert_eq!(view.tableau[6].len(), 7);
        assert_eq!(view.next_cards.len(), 3);
        assert!(!view.complete);
        assert_eq!(view.score, 0);
    }

    #[test]
    fn test_view_is_detached_from_the_board() {
        let mut board = Board::empty();
        board.tableau_mut(0).push_top(Card::face_up(Suit::Hearts, 5));

        let view = GameView::project(&board, 10);
        let _ = board.tableau_mut(0).pop_top();

        assert_eq!(view.tableau[0].len(), 1);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut rng = GameRng::new(7);
        let board = Board::deal(new_shuffled_stock(&mut rng), 3);
        let view = GameView::project(&board, 25);

        let json = serde_json::to_string(&view).unwrap();
        let back: GameView = serde_json::from_str(&json).unwrap();

        assert_eq!(view, back);
    }
}
