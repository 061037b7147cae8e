//! Match configuration and fixed game constants.
//!
//! The table shape (four players, two partnerships) and the scoring
//! constants are fixed by the rules. Everything a host may want to vary per
//! match lives in `GameConfig`.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Players at the table.
pub const NUM_PLAYERS: usize = 4;

/// Partnerships at the table.
pub const NUM_TEAMS: usize = 2;

/// Side piles dealt at the start of a match.
pub const NUM_PILES: usize = 2;

/// Bonus for a team that grabbed a pile.
pub const PILE_BONUS: i32 = 100;

/// Reward for a discard. Non-zero so agents are not pushed away from a
/// mandatory move.
pub const DISCARD_REWARD: i32 = 1;

/// Smallest legal series.
pub const MIN_SERIES_LEN: usize = 3;

/// Natural (non-wild) cards a series needs at minimum.
pub const MIN_NATURALS: usize = 2;

/// Wild cards (jokers and twos) a series may hold at most.
pub const MAX_WILDS: usize = 3;

/// Length at which a series counts as a canasta.
pub const CANASTA_LEN: usize = 7;

/// Length of generated match ids.
pub const MATCH_ID_LENGTH: usize = 8;

/// Per-match configuration.
///
/// ## Example
///
/// ```
/// use canasta_engine::core::GameConfig;
///
/// let config = GameConfig::default().with_seed(7).with_hand_size(5);
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.hand_size, 5);
/// assert!(config.with_jokers);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the deck shuffle.
    pub seed: u64,

    /// Cards dealt to each player.
    pub hand_size: usize,

    /// Cards dealt into each side pile.
    pub pile_size: usize,

    /// Include the four jokers of the double deck.
    pub with_jokers: bool,

    /// Record a snapshot per applied action.
    pub keep_history: bool,

    /// Oldest history entries are evicted past this many. `None` keeps all.
    pub history_capacity: Option<usize>,

    /// Deal from this exact ordering (first card on top) instead of a
    /// shuffled double deck.
    #[serde(default)]
    pub deck_order: Option<Vec<Card>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            hand_size: 11,
            pile_size: 11,
            with_jokers: true,
            keep_history: true,
            history_capacity: None,
            deck_order: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Cards in each side pile, at least one.
    #[must_use]
    pub fn with_pile_size(mut self, size: usize) -> Self {
        self.pile_size = size.max(1);
        self
    }

    #[must_use]
    pub fn with_jokers(mut self, with_jokers: bool) -> Self {
        self.with_jokers = with_jokers;
        self
    }

    #[must_use]
    pub fn with_history(mut self, keep_history: bool) -> Self {
        self.keep_history = keep_history;
        self
    }

    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = Some(capacity);
        self
    }

    /// Deal from a fixed ordering. The first card is the top of the deck.
    #[must_use]
    pub fn with_deck_order(mut self, cards: Vec<Card>) -> Self {
        self.deck_order = Some(cards);
        self
    }

    /// Cards consumed by the opening deal: hands, piles, and the opening discard.
    #[must_use]
    pub fn cards_needed_to_deal(&self) -> usize {
        NUM_PLAYERS * self.hand_size + NUM_PILES * self.pile_size + 1
    }
}
