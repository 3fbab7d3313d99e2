//! Automated play loop.
//!
//! Drives a [`Concentration`] game with a [`Player`] until every pair is
//! found or the choice limit is hit, counting flips the way a table UI
//! counts taps.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{GameRng, Result};
use crate::game::{ChooseOutcome, Concentration};

use super::policy::Player;

/// Configuration for automated play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Maximum choices before giving up (prevents endless random games).
    pub max_choices: usize,

    /// Seed for the player's decisions.
    pub seed: u64,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            max_choices: 10_000,
            seed: 0,
        }
    }
}

impl PlayConfig {
    /// Create a new play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the choice limit.
    #[must_use]
    pub fn with_max_choices(mut self, max_choices: usize) -> Self {
        self.max_choices = max_choices;
        self
    }

    /// Set the decision seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Summary of one automated game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Calls made to `choose_card` (flips).
    pub choices: usize,
    /// Comparisons that found a pair.
    pub matches: usize,
    /// Comparisons that did not.
    pub mismatches: usize,
    /// Whether every pair was found.
    pub completed: bool,
}

impl GameRecord {
    /// Completed comparisons (two-card turns).
    #[must_use]
    pub fn turns(&self) -> usize {
        self.matches + self.mismatches
    }
}

/// Play `game` with `player` until complete or out of choices.
///
/// # Errors
///
/// Propagates an error if the player picks an index outside the deck.
pub fn play_game<P: Player + ?Sized>(
    game: &mut Concentration,
    player: &mut P,
    config: &PlayConfig,
) -> Result<GameRecord> {
    let mut rng = GameRng::new(config.seed);
    let mut record = GameRecord::default();

    player.reset();
    player.observe(game);

    while !game.is_complete() && record.choices < config.max_choices {
        let Some(index) = player.choose(game, &mut rng) else {
            break;
        };

        match game.choose_card(index)? {
            ChooseOutcome::Matched { .. } => record.matches += 1,
            ChooseOutcome::Mismatched { .. } => record.mismatches += 1,
            _ => {}
        }
        record.choices += 1;

        player.observe(game);
    }

    record.completed = game.is_complete();

    info!(
        choices = record.choices,
        matches = record.matches,
        mismatches = record.mismatches,
        completed = record.completed,
        "game finished"
    );

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::{MemoryPlayer, RandomPlayer};

    #[test]
    fn test_config_builder() {
        let config = PlayConfig::new().with_max_choices(50).with_seed(9);
        assert_eq!(config.max_choices, 50);
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_memory_player_completes() {
        let mut game = Concentration::with_seed(8, 42);
        let record = play_game(&mut game, &mut MemoryPlayer::new(), &PlayConfig::default()).unwrap();

        assert!(record.completed);
        assert_eq!(record.matches, 8);
        assert_eq!(record.choices, record.turns() * 2);
        assert!(record.choices <= 2 * game.len());
    }

    #[test]
    fn test_choice_limit() {
        let mut game = Concentration::with_seed(8, 42);
        let config = PlayConfig::new().with_max_choices(3);
        let record = play_game(&mut game, &mut RandomPlayer, &config).unwrap();

        assert_eq!(record.choices, 3);
        assert!(!record.completed);
    }

    #[test]
    fn test_empty_game_is_already_complete() {
        let mut game = Concentration::with_seed(0, 42);
        let record = play_game(&mut game, &mut RandomPlayer, &PlayConfig::default()).unwrap();

        assert_eq!(record, GameRecord { completed: true, ..GameRecord::default() });
    }
}
