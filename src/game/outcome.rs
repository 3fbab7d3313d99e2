//! Selection state and per-choice outcomes.

use serde::{Deserialize, Serialize};

/// Which card, if any, is face up waiting for a second choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// No card is awaiting a partner. Initial state, and the state after
    /// every two-card comparison.
    #[default]
    None,
    /// Exactly one unresolved card is face up, at this index.
    SingleFaceUp(usize),
}

impl Selection {
    /// The face-up index, if any.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::SingleFaceUp(index) => Some(index),
        }
    }
}

/// Result of one call to `choose_card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChooseOutcome {
    /// The card was already matched; nothing changed.
    Inert,
    /// The card was already the single face-up card; nothing changed.
    AlreadyFaceUp,
    /// All cards were turned face down and this one revealed. It is now
    /// the selection.
    Revealed(usize),
    /// The second card paired with the first. Both are now matched.
    Matched {
        /// Index of the card that was already face up.
        first: usize,
        /// Index of the card just chosen.
        second: usize,
    },
    /// The second card did not pair with the first. Both stay face up
    /// until the next choice starts a new selection.
    Mismatched {
        /// Index of the card that was already face up.
        first: usize,
        /// Index of the card just chosen.
        second: usize,
    },
}
