//! Core types: cards, configuration, errors, and the deal RNG.

pub mod card;
pub mod config;
pub mod error;
pub mod rng;

pub use card::{Card, Color, Rank, Suit, ACE, KING, N_CARDS, N_RANKS, N_SUITS};
pub use config::{GameConfig, RewardSource, DEFAULT_CARDS_PER_TURN};
pub use error::EngineError;
pub use rng::GameRng;
