//! Player policies: how an automated player picks the next card.
//!
//! - `RandomPlayer`: Uniform over the cards it is allowed to choose
//! - `MemoryPlayer`: Remembers every symbol it has seen and plays pairs it knows

use rustc_hash::FxHashMap;

use crate::cards::CardId;
use crate::core::GameRng;
use crate::game::Concentration;

/// A policy that chooses which card to tap next.
///
/// Players only look at what a human at the table could see: face-up
/// cards' identifiers and every card's matched state.
pub trait Player {
    /// Pick the next index to pass to `choose_card`.
    ///
    /// Returns `None` when no card can usefully be chosen (the game is
    /// complete).
    fn choose(&mut self, game: &Concentration, rng: &mut GameRng) -> Option<usize>;

    /// Look at the table after a choice has been applied.
    fn observe(&mut self, _game: &Concentration) {}

    /// Forget anything learned from a previous game.
    fn reset(&mut self) {}
}

/// Indices a player may choose: unmatched and not the card already face up.
pub fn candidates(game: &Concentration) -> Vec<usize> {
    let selected = game.face_up_index();
    game.unmatched_indices()
        .filter(|&i| Some(i) != selected)
        .collect()
}

/// Chooses uniformly among candidates. Has no memory.
#[derive(Clone, Debug, Default)]
pub struct RandomPlayer;

impl Player for RandomPlayer {
    fn choose(&mut self, game: &Concentration, rng: &mut GameRng) -> Option<usize> {
        rng.choose(&candidates(game)).copied()
    }
}

/// Perfect-memory player.
///
/// Every card it sees face up is remembered. At the start of a turn it plays
/// a known pair if it has one; otherwise it turns an unseen card. On the
/// second card it completes the pair when the partner's position is known,
/// and otherwise turns another unseen card.
#[derive(Clone, Debug, Default)]
pub struct MemoryPlayer {
    /// Identifier -> positions seen face up and not yet matched.
    known: FxHashMap<CardId, Vec<usize>>,
    seen: Vec<bool>,
}

impl MemoryPlayer {
    /// Create a player with an empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the card at `index` has been seen face up.
    #[must_use]
    pub fn has_seen(&self, index: usize) -> bool {
        self.seen.get(index).copied().unwrap_or(false)
    }

    fn known_pair(&self) -> Option<usize> {
        self.known
            .values()
            .filter(|positions| positions.len() >= 2)
            .map(|positions| positions[0])
            .min()
    }

    fn known_partner(&self, identifier: CardId, index: usize) -> Option<usize> {
        self.known
            .get(&identifier)?
            .iter()
            .copied()
            .find(|&i| i != index)
    }
}

impl Player for MemoryPlayer {
    fn choose(&mut self, game: &Concentration, rng: &mut GameRng) -> Option<usize> {
        let candidates = candidates(game);
        if candidates.is_empty() {
            return None;
        }

        let partner = match game.face_up_index() {
            Some(first) => game
                .card(first)
                .and_then(|card| self.known_partner(card.identifier, first)),
            None => self.known_pair(),
        };
        if let Some(index) = partner.filter(|i| candidates.contains(i)) {
            return Some(index);
        }

        let unseen: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&i| !self.has_seen(i))
            .collect();
        rng.choose(&unseen)
            .or_else(|| rng.choose(&candidates))
            .copied()
    }

    fn reset(&mut self) {
        self.known.clear();
        self.seen.clear();
    }

    fn observe(&mut self, game: &Concentration) {
        if self.seen.len() != game.len() {
            self.reset();
            self.seen.resize(game.len(), false);
        }

        for (index, card) in game.cards().iter().enumerate() {
            if card.is_matched {
                if let Some(positions) = self.known.get_mut(&card.identifier) {
                    positions.retain(|&i| i != index);
                    if positions.is_empty() {
                        self.known.remove(&card.identifier);
                    }
                }
                continue;
            }
            if card.is_face_up && !self.seen[index] {
                self.seen[index] = true;
                self.known.entry(card.identifier).or_default().push(index);
            }
        }
    }
}
