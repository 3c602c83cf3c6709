//! Move validation and execution.
//!
//! Validation and mutation are split: [`plan_move`] inspects the board and
//! returns a verdict without touching it, and [`apply_plan`] carries out a
//! legal plan. The split lets the move search reuse the exact same
//! predicates read-only, and lets the game snapshot for undo *between*
//! validation and mutation.
//!
//! The decision sequence short-circuits on the first failure; every
//! rejection names exactly one [`Outcome`]. Structural misuse (a stock
//! endpoint, an out-of-range tableau index, source equal to destination)
//! is an [`EngineError`] instead, since no legal game ever contains such a
//! request.

use crate::core::card::{Suit, ACE};
use crate::core::error::EngineError;
use crate::game::board::Board;
use crate::piles::{Pile, PileRef};

use super::outcome::{Outcome, Outcomes};

/// A validated, ready-to-apply move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MovePlan {
    /// Move the source's top card onto a foundation.
    ToFoundation {
        source: PileRef,
        suit: Suit,
        outcome: Outcome,
    },
    /// Move the top `count` cards of the source onto a tableau pile.
    ToTableau {
        source: PileRef,
        dest: u8,
        count: usize,
        outcome: Outcome,
    },
}

/// Verdict of validation: either a plan or the reason for rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Verdict {
    Legal(MovePlan),
    Illegal(Outcome),
}

/// Validate a proposed move without mutating the board.
pub(crate) fn plan_move(
    board: &Board,
    source: PileRef,
    dest: PileRef,
    count: usize,
) -> Result<Verdict, EngineError> {
    if !source.is_move_source() {
        return Err(EngineError::InvalidReference {
            reference: source,
            reason: "the stock is consumed by drawing, not by moves",
        });
    }
    if !dest.is_move_destination() {
        return Err(EngineError::InvalidReference {
            reference: dest,
            reason: "cards can only be placed on tableau or foundation piles",
        });
    }
    if source == dest {
        return Err(EngineError::InvalidReference {
            reference: dest,
            reason: "source and destination are the same pile",
        });
    }
    let src = board.pile(source)?;
    let dest_pile = board.pile(dest)?;

    // 1. Count check.
    if count == 0 || count > src.len() {
        return Ok(Verdict::Illegal(Outcome::RequestedTooManyCards));
    }
    if source.is_single_card_source() && count != 1 {
        return Ok(Verdict::Illegal(Outcome::RequestedTooManyCards));
    }

    // 2. Visibility check: the whole run must be face-up.
    if src.face_up_run_len() < count {
        return Ok(Verdict::Illegal(Outcome::CardsNotMovable));
    }

    // 3. Destination-kind dispatch.
    match dest {
        PileRef::Foundation(suit) => {
            Ok(plan_to_foundation(src, source, suit, dest_pile, count))
        }
        PileRef::Tableau(index) => {
            Ok(plan_to_tableau(src, source, index, dest_pile, count))
        }
        PileRef::Stock | PileRef::Waste | PileRef::NextCards => {
            unreachable!("destination kind checked above")
        }
    }
}

fn plan_to_foundation(
    src: &Pile,
    source: PileRef,
    suit: Suit,
    foundation: &Pile,
    count: usize,
) -> Verdict {
    if count != 1 {
        return Verdict::Illegal(Outcome::InvalidFoundationMoveNumber);
    }
    if source.is_foundation() {
        return Verdict::Illegal(Outcome::InvalidFoundationMoveFoundation);
    }

    let card = src.top().expect("count check guarantees a top card");
    if card.suit != suit {
        return Verdict::Illegal(Outcome::InvalidFoundationMoveSuit);
    }

    let outcome = match foundation.top() {
        None if card.rank == ACE => Outcome::AceToFoundation,
        None => return Verdict::Illegal(Outcome::InvalidFoundationMoveAce),
        Some(top) if card.rank == top.rank + 1 => Outcome::SuccessfulFoundationMove,
        Some(_) => return Verdict::Illegal(Outcome::InvalidFoundationMoveNumber),
    };
    Verdict::Legal(MovePlan::ToFoundation {
        source,
        suit,
        outcome,
    })
}

fn plan_to_tableau(
    src: &Pile,
    source: PileRef,
    dest: u8,
    dest_pile: &Pile,
    count: usize,
) -> Verdict {
    // Foundations give cards back one at a time.
    if source.is_foundation() && count != 1 {
        return Verdict::Illegal(Outcome::RequestedTooManyCards);
    }

    // The stacking rule applies to the bottom card of the moved run, the
    // card that will land on the destination.
    let bottom = src
        .get(src.len() - count)
        .expect("count check guarantees the run exists");

    let outcome = match dest_pile.top() {
        None if bottom.is_king() => Outcome::SuccessfulTableauMoveKing,
        None => return Verdict::Illegal(Outcome::InvalidTableauMoveKing),
        Some(top) if !bottom.alternates_with(top) => {
            return Verdict::Illegal(Outcome::InvalidTableauMoveColor)
        }
        Some(top) if !bottom.ranks_under(top) => {
            return Verdict::Illegal(Outcome::InvalidTableauMoveNumber)
        }
        Some(_) => Outcome::SuccessfulTableauMove,
    };
    Verdict::Legal(MovePlan::ToTableau {
        source,
        dest,
        count,
        outcome,
    })
}

/// Carry out a validated plan: relocate the run, flip a newly exposed
/// tableau card, and recheck completion after foundation deposits.
pub(crate) fn apply_plan(board: &mut Board, plan: MovePlan) -> Outcomes {
    let mut outcomes = Outcomes::new();

    let source = match plan {
        MovePlan::ToFoundation {
            source,
            suit,
            outcome,
        } => {
            let card = source_pile_mut(board, source)
                .pop_top()
                .expect("plan validated against this board");
            board.foundation_mut(suit).push_top(card);
            outcomes.push(outcome);
            source
        }
        MovePlan::ToTableau {
            source,
            dest,
            count,
            outcome,
        } => {
            let run = source_pile_mut(board, source).take_top(count);
            board.tableau_mut(dest as usize).append(run);
            outcomes.push(outcome);
            source
        }
    };

    if let PileRef::Tableau(index) = source {
        if board.tableau_mut(index as usize).flip_top_up() {
            outcomes.push(Outcome::RevealHiddenCard);
        }
    }

    if matches!(plan, MovePlan::ToFoundation { .. }) && board.is_complete() {
        outcomes.push(Outcome::GameComplete);
    }

    outcomes
}

fn source_pile_mut(board: &mut Board, source: PileRef) -> &mut Pile {
    match source {
        PileRef::Tableau(i) => board.tableau_mut(i as usize),
        PileRef::Foundation(suit) => board.foundation_mut(suit),
        PileRef::Waste => board.waste_mut(),
        PileRef::NextCards => board.next_cards_mut(),
        PileRef::Stock => unreachable!("the stock is never a move source"),
    }
}
