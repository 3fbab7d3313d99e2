//! # concentration
//!
//! A minimal "Concentration" (memory-matching) card game model.
//!
//! A deck of paired cards is shuffled once; the player flips two cards at a
//! time and matching pairs are removed from play.
//!
//! ## Design Principles
//!
//! 1. **Pairs are data**: `Card` is `Copy`. The two cards of a pair are
//!    independent records sharing an identifier, never aliases.
//!
//! 2. **No hidden globals**: Identifiers come from an explicit
//!    `IdentifierFactory`; shuffles from an explicit, seedable `GameRng`.
//!
//! 3. **One way to mutate**: After the deal, card state changes only through
//!    `Concentration::choose_card`.
//!
//! ## Modules
//!
//! - `core`: Errors, RNG, configuration
//! - `cards`: Card identifiers and the card value type
//! - `game`: The `Concentration` state machine
//! - `players`: Automated players and the play loop
//! - `observation`: Tensor encoding of the visible table
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod cards;
pub mod game;
pub mod players;
pub mod observation;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ConcentrationConfig, ConcentrationError, GameRng, Result,
};

pub use crate::cards::{Card, CardId, IdentifierFactory};

pub use crate::game::{ChooseOutcome, Concentration, Selection};

pub use crate::players::{
    play_game, GameRecord, MemoryPlayer, PlayConfig, Player, RandomPlayer,
};

pub use crate::observation::{CardEncoder, EncodedState};
