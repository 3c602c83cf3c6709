//! Available-move search.
//!
//! A pure read-only scan over the board that reuses the validator's
//! predicates: every tableau face-up run length against every foundation
//! (single cards only) and every other tableau pile, plus the next-cards
//! top card against everything. Callers use the result to pick moves or to
//! tell a stuck game from a merely stagnating one.

use serde::{Deserialize, Serialize};

use crate::core::card::Suit;
use crate::game::board::Board;
use crate::piles::{PileRef, N_TABLEAU};

use super::validator::{plan_move, Verdict};

/// One legal move: where from, where to, how many cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveSpec {
    /// Source pile.
    pub source: PileRef,
    /// Destination pile.
    pub dest: PileRef,
    /// Number of cards to move.
    pub count: usize,
}

impl std::fmt::Display for MoveSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} x{}", self.source, self.dest, self.count)
    }
}

/// Enumerate every currently legal move.
///
/// The scan is O(piles × run lengths × destinations) and never mutates the
/// board. Every returned move applies successfully through `attempt_move`.
pub(crate) fn legal_moves(board: &Board) -> Vec<MoveSpec> {
    let mut moves = Vec::new();
    let mut consider = |source: PileRef, dest: PileRef, count: usize| {
        if matches!(plan_move(board, source, dest, count), Ok(Verdict::Legal(_))) {
            moves.push(MoveSpec {
                source,
                dest,
                count,
            });
        }
    };

    for index in 0..N_TABLEAU as u8 {
        let source = PileRef::Tableau(index);
        let run_len = board.tableau(index as usize).face_up_run_len();

        for count in 1..=run_len {
            if count == 1 {
                for suit in Suit::ALL {
                    consider(source, PileRef::Foundation(suit), 1);
                }
            }
            for dest in 0..N_TABLEAU as u8 {
                if dest != index {
                    consider(source, PileRef::Tableau(dest), count);
                }
            }
        }
    }

    if !board.next_cards().is_empty() {
        for suit in Suit::ALL {
            consider(PileRef::NextCards, PileRef::Foundation(suit), 1);
        }
        for dest in 0..N_TABLEAU as u8 {
            consider(PileRef::NextCards, PileRef::Tableau(dest), 1);
        }
    }

    moves
}

/// Is the game truly stuck?
///
/// Stuck means no stock to draw, no waste to recycle, and no legal move
/// anywhere. A game with moves still available may be stagnating, but it is
/// not stuck.
pub(crate) fn is_stuck(board: &Board) -> bool {
    board.stock().is_empty() && board.waste().is_empty() && legal_moves(board).is_empty()
}
