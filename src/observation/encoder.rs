//! Table encoding for learning agents.
//!
//! Turns what a player can see of a [`Concentration`] table into a
//! `[cards, 4]` tensor. Identifiers of face-down cards are never encoded.

use crate::cards::CardId;
use crate::game::Concentration;

use super::tensor::EncodedState;

/// Features per card.
pub const FEATURES_PER_CARD: usize = 4;

/// Encodes a table as one row per card:
///
/// 0. face up (0/1)
/// 1. matched (0/1)
/// 2. is the current selection (0/1)
/// 3. visible symbol: `(rank + 1) / pair_count` where `rank` is the
///    identifier's position among the game's identifiers, 0 when face down
///
/// Ranking keeps the symbol feature in `(0, 1]` no matter how many
/// identifiers a shared factory has already issued.
#[derive(Clone, Copy, Debug, Default)]
pub struct CardEncoder;

impl CardEncoder {
    /// Create an encoder.
    pub fn new() -> Self {
        Self
    }

    /// Shape of an encoding for `game`.
    #[must_use]
    pub fn output_shape(&self, game: &Concentration) -> Vec<usize> {
        vec![game.len(), FEATURES_PER_CARD]
    }

    /// Encode the visible table.
    #[must_use]
    pub fn encode(&self, game: &Concentration) -> EncodedState {
        let mut identifiers: Vec<CardId> = game.cards().iter().map(|c| c.identifier).collect();
        identifiers.sort_unstable();
        identifiers.dedup();
        let scale = identifiers.len().max(1) as f32;

        let selected = game.face_up_index();
        let mut tensor = Vec::with_capacity(game.len() * FEATURES_PER_CARD);

        for (index, card) in game.cards().iter().enumerate() {
            let symbol = if card.is_face_up {
                identifiers
                    .binary_search(&card.identifier)
                    .map_or(0.0, |rank| (rank + 1) as f32 / scale)
            } else {
                0.0
            };

            tensor.push(flag(card.is_face_up));
            tensor.push(flag(card.is_matched));
            tensor.push(flag(selected == Some(index)));
            tensor.push(symbol);
        }

        EncodedState::new(tensor, self.output_shape(game))
    }
}

fn flag(value: bool) -> f32 {
    if value {
        1.0
    } else {
        0.0
    }
}
