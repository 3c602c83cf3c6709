//! The draw/recycle engine: stock → next-cards → waste cycling.
//!
//! A draw first retires the current next-cards to the back of the waste
//! pile (preserving draw order), recycles the waste into the stock when the
//! stock has run dry, then turns over the next batch. Recycling reports
//! whether the pile shrank since the last recycle; a shrinking batch means
//! the player is cycling the same residual cards without placing any, which
//! callers use for stagnation detection.

use crate::game::board::Board;
use crate::piles::Pile;

use super::outcome::{Outcome, Outcomes};

/// Would a draw change anything?
///
/// False only when stock, waste, and next-cards are all empty.
pub(crate) fn would_change(board: &Board) -> bool {
    !(board.stock().is_empty() && board.waste().is_empty() && board.next_cards().is_empty())
}

/// Advance the draw cycle. Call only after [`would_change`] returned true
/// (and after the caller snapshotted for undo).
pub(crate) fn advance(
    board: &mut Board,
    cards_per_turn: usize,
    last_recycle_len: &mut Option<usize>,
) -> Outcomes {
    let mut outcomes = Outcomes::new();

    // Retire current next-cards to the back of the waste, in draw order.
    let retired = board.next_cards_mut().take_all();
    board.waste_mut().append(retired);

    if board.stock().is_empty() && !board.waste().is_empty() {
        let batch = board.waste().len();
        let outcome = match *last_recycle_len {
            Some(previous) if batch < previous => Outcome::RecycleWastePileAndUsedCards,
            _ => Outcome::RecyclingWastePile,
        };
        *last_recycle_len = Some(batch);

        let recycled = board.waste_mut().take_all();
        *board.stock_mut() = Pile::from_cards(recycled);
        outcomes.push(outcome);
    }

    let batch = board.stock().len().min(cards_per_turn);
    for _ in 0..batch {
        let mut card = board
            .stock_mut()
            .draw_front()
            .expect("batch bounded by stock length");
        card.face_up = true;
        board.next_cards_mut().push_top(card);
    }

    outcomes.push(if batch == 0 {
        Outcome::NoCardsToDeal
    } else {
        Outcome::DealtNextCards
    });
    outcomes
}
