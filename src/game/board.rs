//! The board: all thirteen piles, the deck factory, and the deal.
//!
//! ## Layout
//!
//! Seven tableau piles, four foundations (one per suit), the stock, the
//! waste pile, and the next-cards buffer. The 52 cards are created once by
//! [`new_shuffled_stock`] and only ever *move* between piles afterwards;
//! [`Board::debug_assert_conservation`] audits that invariant after every
//! mutation in debug builds.

use crate::core::card::{Card, Suit, N_CARDS, N_RANKS, N_SUITS};
use crate::core::error::EngineError;
use crate::core::rng::GameRng;
use crate::piles::{Pile, PileRef, N_TABLEAU};

/// Build the 52-card deck and shuffle it into a fresh stock.
///
/// All cards start face-down; the deal flips what should show. Same RNG
/// state, same ordering.
#[must_use]
pub fn new_shuffled_stock(rng: &mut GameRng) -> Pile {
    let mut cards: Vec<Card> = Vec::with_capacity(N_CARDS);
    for suit in Suit::ALL {
        for rank in 1..=N_RANKS as u8 {
            cards.push(Card::new(suit, rank));
        }
    }
    rng.shuffle(&mut cards);
    Pile::from_cards(cards.into_iter().collect())
}

/// The thirteen piles of a Klondike game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    tableau: [Pile; N_TABLEAU],
    foundations: [Pile; N_SUITS],
    stock: Pile,
    waste: Pile,
    next_cards: Pile,
}

impl Board {
    /// Deal a fresh board from a 52-card stock.
    ///
    /// Tableau pile `i` receives `i + 1` cards from the stock front with
    /// only the last-dealt card face-up. The remaining stock is marked
    /// face-up (visible once reached), and the next-cards buffer is primed
    /// with up to `cards_per_turn` cards.
    #[must_use]
    pub fn deal(mut stock: Pile, cards_per_turn: usize) -> Self {
        let mut tableau: [Pile; N_TABLEAU] = Default::default();
        for (i, pile) in tableau.iter_mut().enumerate() {
            for dealt in 0..=i {
                let mut card = stock
                    .draw_front()
                    .expect("stock holds 52 cards before the deal");
                card.face_up = dealt == i;
                pile.push_top(card);
            }
        }

        let mut board = Self {
            tableau,
            foundations: Default::default(),
            stock: Pile::from_cards(
                stock
                    .take_all()
                    .into_iter()
                    .map(|card| Card {
                        face_up: true,
                        ..card
                    })
                    .collect(),
            ),
            waste: Pile::new(),
            next_cards: Pile::new(),
        };

        for _ in 0..cards_per_turn {
            let Some(card) = board.stock.draw_front() else {
                break;
            };
            board.next_cards.push_top(card);
        }

        board.debug_assert_conservation();
        board
    }

    /// Resolve a reference to its pile.
    ///
    /// The only rejectable reference is an out-of-range tableau index.
    pub fn pile(&self, reference: PileRef) -> Result<&Pile, EngineError> {
        match reference {
            PileRef::Stock => Ok(&self.stock),
            PileRef::Tableau(i) if (i as usize) < N_TABLEAU => Ok(&self.tableau[i as usize]),
            PileRef::Tableau(_) => Err(EngineError::InvalidReference {
                reference,
                reason: "index out of range",
            }),
            PileRef::Foundation(suit) => Ok(&self.foundations[suit.index()]),
            PileRef::Waste => Ok(&self.waste),
            PileRef::NextCards => Ok(&self.next_cards),
        }
    }

    /// Tableau pile by index. Panics if `index >= 7`; use [`Board::pile`]
    /// for caller-supplied indices.
    #[must_use]
    pub fn tableau(&self, index: usize) -> &Pile {
        &self.tableau[index]
    }

    /// Foundation pile for a suit.
    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &Pile {
        &self.foundations[suit.index()]
    }

    /// The stock.
    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    /// The waste pile.
    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    /// The next-cards buffer.
    #[must_use]
    pub fn next_cards(&self) -> &Pile {
        &self.next_cards
    }

    pub(crate) fn tableau_mut(&mut self, index: usize) -> &mut Pile {
        &mut self.tableau[index]
    }

    pub(crate) fn foundation_mut(&mut self, suit: Suit) -> &mut Pile {
        &mut self.foundations[suit.index()]
    }

    pub(crate) fn stock_mut(&mut self) -> &mut Pile {
        &mut self.stock
    }

    pub(crate) fn waste_mut(&mut self) -> &mut Pile {
        &mut self.waste
    }

    pub(crate) fn next_cards_mut(&mut self) -> &mut Pile {
        &mut self.next_cards
    }

    /// Total cards across the four foundations.
    #[must_use]
    pub fn foundation_count(&self) -> usize {
        self.foundations.iter().map(Pile::len).sum()
    }

    /// Have all 52 cards reached the foundations?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.foundation_count() == N_CARDS
    }

    /// Total cards across every pile.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles().map(Pile::len).sum()
    }

    /// Iterate every pile: tableau, foundations, stock, waste, next-cards.
    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        self.tableau
            .iter()
            .chain(self.foundations.iter())
            .chain([&self.stock, &self.waste, &self.next_cards])
    }

    /// Audit the conservation invariant: each of the 52 (suit, rank)
    /// identities appears exactly once across all piles.
    ///
    /// A violation is a programming error inside the engine, so this fails
    /// loudly. Debug builds only.
    pub(crate) fn debug_assert_conservation(&self) {
        #[cfg(debug_assertions)]
        {
            let mut seen = [[false; N_RANKS]; N_SUITS];
            let mut total = 0usize;
            for pile in self.piles() {
                for card in pile.iter() {
                    let slot = &mut seen[card.suit.index()][(card.rank - 1) as usize];
                    assert!(!*slot, "card {card} present in two piles");
                    *slot = true;
                    total += 1;
                }
            }
            assert_eq!(total, N_CARDS, "card count diverged from 52");
        }
    }

    /// An empty board, for building test positions.
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            tableau: Default::default(),
            foundations: Default::default(),
            stock: Pile::new(),
            waste: Pile::new(),
            next_cards: Pile::new(),
        }
    }
}
