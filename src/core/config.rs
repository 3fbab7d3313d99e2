//! Game configuration.
//!
//! Callers describe a deal with `ConcentrationConfig` and hand it to
//! [`Concentration::from_config`](crate::game::Concentration::from_config).
//! Automated play is configured separately via
//! [`PlayConfig`](crate::players::PlayConfig).

use serde::{Deserialize, Serialize};

use super::GameRng;

/// Number of pairs on the classic board (one per symbol of the standard
/// eight-symbol set).
pub const DEFAULT_PAIR_COUNT: usize = 8;

/// Configuration for dealing a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcentrationConfig {
    /// Number of card pairs. The deck holds twice as many cards.
    /// Zero is allowed and yields an empty deck.
    pub pair_count: usize,

    /// Shuffle seed. `None` draws a seed from the operating system.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ConcentrationConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            seed: None,
        }
    }
}

impl ConcentrationConfig {
    /// Create a config for the given number of pairs.
    pub fn new(pair_count: usize) -> Self {
        Self {
            pair_count,
            ..Self::default()
        }
    }

    /// Config sized for a board of `card_slots` positions.
    ///
    /// Odd slot counts round up to the next whole pair, the way a board
    /// with an odd number of buttons still needs every button backed by a card.
    pub fn for_card_slots(card_slots: usize) -> Self {
        Self::new(card_slots.div_ceil(2))
    }

    /// Set the number of pairs.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Pin the shuffle to a seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of cards a deal with this config produces.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pair_count * 2
    }

    /// Build the RNG this config describes.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}
