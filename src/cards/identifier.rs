//! Card identifiers and the counter that issues them.
//!
//! Two cards form a pair exactly when their `CardId`s are equal. Identifiers
//! come from an explicit [`IdentifierFactory`] rather than a global, so a
//! caller decides whether games share an identifier space.
//!
//! ```
//! use concentration::cards::{CardId, IdentifierFactory};
//!
//! let mut factory = IdentifierFactory::new();
//! assert_eq!(factory.next_identifier(), CardId::new(1));
//! assert_eq!(factory.next_identifier(), CardId::new(2));
//! assert_eq!(factory.issued(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Pairing key shared by the two cards of a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u64);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Monotonic identifier counter.
///
/// Starts at zero; every call to [`next_identifier`](Self::next_identifier)
/// increments it once and returns the new value, so the first identifier
/// is 1. Never resets. Mutation goes through `&mut self`, so sharing one
/// factory across threads requires the caller to synchronise it.
#[derive(Clone, Debug, Default)]
pub struct IdentifierFactory {
    counter: u64,
}

impl IdentifierFactory {
    /// Create a factory that has issued nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the next identifier.
    pub fn next_identifier(&mut self) -> CardId {
        self.counter += 1;
        CardId(self.counter)
    }

    /// Number of identifiers issued so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one() {
        let mut factory = IdentifierFactory::new();
        assert_eq!(factory.issued(), 0);
        assert_eq!(factory.next_identifier(), CardId(1));
    }

    #[test]
    fn test_monotonic() {
        let mut factory = IdentifierFactory::new();
        let ids: Vec<_> = (0..5).map(|_| factory.next_identifier()).collect();

        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(factory.issued(), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId::new(42)), "Card(42)");
        assert_eq!(CardId::new(42).raw(), 42);
    }

    #[test]
    fn test_serialization() {
        let id = CardId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
