//! The `Card` value type.

use serde::{Deserialize, Serialize};

use super::identifier::{CardId, IdentifierFactory};

/// One physical card on the table.
///
/// `Card` is `Copy`: placing a card into a deck copies it, so the two
/// members of a pair are independent records that only share an
/// identifier. Flipping one never flips the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Symbol currently visible.
    pub is_face_up: bool,

    /// Permanently resolved as part of a found pair.
    pub is_matched: bool,

    /// Pairing key.
    pub identifier: CardId,
}

impl Card {
    /// Create a face-down card with a fresh identifier from `factory`.
    #[must_use]
    pub fn new(factory: &mut IdentifierFactory) -> Self {
        Self::with_identifier(factory.next_identifier())
    }

    /// Create a face-down, unmatched card with a known identifier.
    #[must_use]
    pub const fn with_identifier(identifier: CardId) -> Self {
        Self {
            is_face_up: false,
            is_matched: false,
            identifier,
        }
    }

    /// Whether `other` is this card's partner.
    #[must_use]
    pub fn is_pair_of(&self, other: &Card) -> bool {
        self.identifier == other.identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_consumes_identifier() {
        let mut factory = IdentifierFactory::new();
        let a = Card::new(&mut factory);
        let b = Card::new(&mut factory);

        assert_eq!(a.identifier, CardId(1));
        assert_eq!(b.identifier, CardId(2));
        assert_eq!(factory.issued(), 2);
        assert!(!a.is_face_up);
        assert!(!a.is_matched);
    }

    #[test]
    fn test_copies_are_independent() {
        let mut factory = IdentifierFactory::new();
        let original = Card::new(&mut factory);
        let mut pair = [original, original];

        pair[0].is_face_up = true;
        pair[1].is_matched = true;

        assert!(pair[0].is_face_up && !pair[0].is_matched);
        assert!(!pair[1].is_face_up && pair[1].is_matched);
        assert!(pair[0].is_pair_of(&pair[1]));
    }

    #[test]
    fn test_is_pair_of() {
        let a = Card::with_identifier(CardId(1));
        let b = Card::with_identifier(CardId(2));
        let mut c = Card::with_identifier(CardId(1));
        c.is_face_up = true;

        assert!(!a.is_pair_of(&b));
        // Face state does not affect pairing
        assert!(a.is_pair_of(&c));
    }

    #[test]
    fn test_serialization() {
        let mut card = Card::with_identifier(CardId(9));
        card.is_matched = true;

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
