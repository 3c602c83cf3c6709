//! Game configuration.
//!
//! Callers configure a game at construction time: an optional shuffle seed,
//! how many cards a draw turns over, and where the reward table comes from.
//! Configuration is validated once, when the game is built; a constructed
//! game never fails on configuration grounds afterwards.

use crate::rules::RewardTable;

/// Default number of cards turned over per draw.
pub const DEFAULT_CARDS_PER_TURN: usize = 3;

/// Where the reward table comes from.
///
/// The engine performs no file I/O; callers wanting a file-backed table
/// read the file themselves and pass the contents as `Json`.
#[derive(Clone, Debug, Default)]
pub enum RewardSource {
    /// The built-in table.
    #[default]
    Standard,
    /// A prebuilt table, used as-is.
    Table(RewardTable),
    /// JSON overrides applied on top of the built-in table, keyed by the
    /// snake_case outcome names.
    Json(String),
}

/// Configuration for a new game.
///
/// ## Defaults
///
/// - `seed`: none (shuffle seeded from OS entropy)
/// - `cards_per_turn`: 3
/// - `rewards`: the built-in table
///
/// ```
/// use klondike_engine::core::GameConfig;
///
/// let config = GameConfig::new().with_seed(42).with_cards_per_turn(1);
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.cards_per_turn, 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Shuffle seed. Same seed, same deal. `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Cards turned over per draw (1 and 3 are the common variants).
    pub cards_per_turn: usize,

    /// Reward table source.
    pub rewards: RewardSource,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            cards_per_turn: DEFAULT_CARDS_PER_TURN,
            rewards: RewardSource::Standard,
        }
    }
}

impl GameConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set how many cards a draw turns over.
    #[must_use]
    pub fn with_cards_per_turn(mut self, cards_per_turn: usize) -> Self {
        self.cards_per_turn = cards_per_turn;
        self
    }

    /// Use a prebuilt reward table.
    #[must_use]
    pub fn with_rewards(mut self, table: RewardTable) -> Self {
        self.rewards = RewardSource::Table(table);
        self
    }

    /// Apply JSON reward overrides on top of the built-in table.
    #[must_use]
    pub fn with_reward_json(mut self, json: impl Into<String>) -> Self {
        self.rewards = RewardSource::Json(json.into());
        self
    }
}
