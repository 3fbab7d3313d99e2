//! Card system: identifiers and the card value type.
//!
//! ## Key Types
//!
//! - `CardId`: Pairing key, shared by exactly two cards in a game
//! - `IdentifierFactory`: Explicit counter issuing `CardId`s
//! - `Card`: Face-up/matched state plus identifier

pub mod card;
pub mod identifier;

pub use card::Card;
pub use identifier::{CardId, IdentifierFactory};
