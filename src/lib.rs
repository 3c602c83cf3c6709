//! # klondike-engine
//!
//! A Klondike solitaire rules engine for CLI shells and RL-agent frontends.
//!
//! ## Design Principles
//!
//! 1. **Rules are the whole job**: the engine owns the deck/pile data
//!    model, legal-move semantics, scoring, undo, and terminal detection.
//!    Rendering, input parsing, observation encoding, and training loops
//!    are callers' concerns.
//!
//! 2. **Illegal moves are data, not errors**: every decision yields an
//!    [`Outcome`] from a closed enum; callers branch on outcomes, and a bad
//!    move request never aborts anything. Only structural misuse (an
//!    out-of-range pile reference) is an [`EngineError`].
//!
//! 3. **Deterministic when asked**: a seeded game replayed with the same
//!    move script reaches the same state and score, bit for bit.
//!
//! ## Architecture
//!
//! - **Persistent piles**: `im` vectors make undo snapshots O(1) structural
//!   shares instead of deep copies.
//!
//! - **Validate, snapshot, mutate**: the validator plans read-only, the
//!   game snapshots for undo, then the plan is applied. The available-move
//!   search reuses the same predicates without ever mutating.
//!
//! ## Modules
//!
//! - `core`: cards, configuration, errors, the deal RNG
//! - `piles`: the pile container and the pile-reference vocabulary
//! - `rules`: move validation/execution, drawing, outcomes, rewards, search
//! - `game`: the board, undo history, view projection, and the game facade
//!
//! ## Example
//!
//! ```
//! use klondike_engine::{GameConfig, KlondikeGame};
//!
//! let mut game = KlondikeGame::new(GameConfig::new().with_seed(42)).unwrap();
//!
//! // Turn over the first cards, then try every legal move the engine finds
//! game.advance_draw();
//! let before = game.view();
//! for spec in game.legal_moves() {
//!     let result = game.attempt_move(spec.source, spec.dest, spec.count).unwrap();
//!     assert!(result.applied);
//!     game.undo();
//! }
//! assert_eq!(game.view(), before);
//! ```

pub mod core;
pub mod game;
pub mod piles;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Card, Color, EngineError, GameConfig, GameRng, Rank, RewardSource, Suit, ACE,
    DEFAULT_CARDS_PER_TURN, KING, N_CARDS, N_RANKS, N_SUITS,
};

pub use crate::piles::{Pile, PileRef, N_TABLEAU};

pub use crate::rules::{MoveOutcome, MoveSpec, Outcome, Outcomes, RewardEntry, RewardTable};

pub use crate::game::{new_shuffled_stock, Board, GameView, KlondikeGame};
