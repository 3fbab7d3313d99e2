//! Error types for the game model.
//!
//! The model has no I/O, so the only runtime failures are a caller asking for
//! a card position that does not exist, or passing a negative one.

use thiserror::Error;

/// Errors returned by [`Concentration`](crate::game::Concentration) operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConcentrationError {
    /// A card index outside `0..len` was passed to `choose_card`.
    #[error("card index {index} is out of range for a deck of {len} cards")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of cards in the deck.
        len: usize,
    },

    /// A negative index arrived from a signed caller, such as Python.
    #[error("card index {index} is negative")]
    NegativeIndex {
        /// The index that was requested.
        index: isize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ConcentrationError>;

/// Convert a signed card index to a table position.
///
/// # Errors
///
/// Returns [`ConcentrationError::NegativeIndex`] for `index < 0`. Upper-bound
/// checks are left to `choose_card`.
pub fn card_index(index: isize) -> Result<usize> {
    usize::try_from(index).map_err(|_| ConcentrationError::NegativeIndex { index })
}
