//! The Concentration game model.

use tracing::{debug, trace};

use crate::cards::{Card, IdentifierFactory};
use crate::core::{ConcentrationConfig, ConcentrationError, GameRng, Result};

use super::outcome::{ChooseOutcome, Selection};

/// A dealt game of Concentration.
///
/// The card sequence is fixed at `2 * pair_count` cards from the moment of
/// the deal. Afterwards only the face-up and matched flags of individual
/// cards and the [`Selection`] change, and only through
/// [`choose_card`](Self::choose_card).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Concentration {
    cards: Vec<Card>,
    selection: Selection,
}

impl Concentration {
    /// Deal `pair_count` pairs with a fresh identifier space and an
    /// entropy-seeded shuffle.
    #[must_use]
    pub fn new(pair_count: usize) -> Self {
        Self::deal(pair_count, &mut IdentifierFactory::new(), &mut GameRng::from_entropy())
    }

    /// Deal `pair_count` pairs with a deterministic shuffle.
    #[must_use]
    pub fn with_seed(pair_count: usize, seed: u64) -> Self {
        Self::deal(pair_count, &mut IdentifierFactory::new(), &mut GameRng::new(seed))
    }

    /// Deal the game a config describes, drawing identifiers from `factory`.
    #[must_use]
    pub fn from_config(config: &ConcentrationConfig, factory: &mut IdentifierFactory) -> Self {
        Self::deal(config.pair_count, factory, &mut config.rng())
    }

    /// Deal `pair_count` pairs.
    ///
    /// Each pair consumes one identifier from `factory` and is placed as two
    /// independent copies. The whole deck is then shuffled with `rng`.
    #[must_use]
    pub fn deal(pair_count: usize, factory: &mut IdentifierFactory, rng: &mut GameRng) -> Self {
        let mut cards = Vec::with_capacity(pair_count * 2);
        for _ in 0..pair_count {
            let card = Card::new(factory);
            cards.push(card);
            cards.push(card);
        }
        rng.shuffle(&mut cards);

        debug!(pair_count, seed = rng.seed(), "dealt concentration deck");

        Self {
            cards,
            selection: Selection::None,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            selection: Selection::None,
        }
    }

    /// Choose (tap) the card at `index`.
    ///
    /// - A matched card is inert.
    /// - Choosing the card that is already the single face-up card does nothing.
    /// - With one card face up, the chosen card is turned up and compared;
    ///   equal identifiers mark both matched. The earlier card is left face
    ///   up either way, and the selection clears.
    /// - With no card selected, every card is turned face down and the chosen
    ///   card becomes the face-up selection.
    ///
    /// # Errors
    ///
    /// Returns [`ConcentrationError::IndexOutOfRange`] when `index >= len`.
    /// The game is left unchanged.
    pub fn choose_card(&mut self, index: usize) -> Result<ChooseOutcome> {
        let len = self.cards.len();
        if index >= len {
            return Err(ConcentrationError::IndexOutOfRange { index, len });
        }

        if self.cards[index].is_matched {
            trace!(index, "ignored tap on matched card");
            return Ok(ChooseOutcome::Inert);
        }

        match self.selection {
            Selection::SingleFaceUp(face_up) if face_up == index => {
                trace!(index, "ignored tap on face-up card");
                Ok(ChooseOutcome::AlreadyFaceUp)
            }
            Selection::SingleFaceUp(first) => {
                let matched = self.cards[first].is_pair_of(&self.cards[index]);
                if matched {
                    self.cards[first].is_matched = true;
                    self.cards[index].is_matched = true;
                }
                self.cards[index].is_face_up = true;
                self.selection = Selection::None;

                debug!(first, second = index, matched, "compared cards");

                Ok(if matched {
                    ChooseOutcome::Matched { first, second: index }
                } else {
                    ChooseOutcome::Mismatched { first, second: index }
                })
            }
            Selection::None => {
                for card in &mut self.cards {
                    card.is_face_up = false;
                }
                self.cards[index].is_face_up = true;
                self.selection = Selection::SingleFaceUp(index);

                debug!(index, "revealed card");

                Ok(ChooseOutcome::Revealed(index))
            }
        }
    }

    /// All cards in table order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card at `index`, if it exists.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards (a zero-pair deal).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Index of the one and only face-up card awaiting a partner.
    #[must_use]
    pub fn face_up_index(&self) -> Option<usize> {
        self.selection.index()
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn matched_pair_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }

    /// Indices of cards still in play.
    pub fn unmatched_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| !card.is_matched)
            .map(|(i, _)| i)
    }

    /// Whether every pair has been found. An empty deck is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|c| c.is_matched)
    }
}
