//! Concentration (memory-matching) game model.
//!
//! A deck of paired cards is shuffled once. The player flips two cards at a
//! time; a pair with equal identifiers is removed from play.
//!
//! ```
//! use concentration::game::{ChooseOutcome, Concentration};
//!
//! let mut game = Concentration::with_seed(1, 42);
//! assert_eq!(game.len(), 2);
//!
//! game.choose_card(0)?;
//! assert_eq!(game.choose_card(1)?, ChooseOutcome::Matched { first: 0, second: 1 });
//! assert!(game.is_complete());
//! # Ok::<(), concentration::core::ConcentrationError>(())
//! ```

mod concentration;
mod outcome;

pub use concentration::Concentration;
pub use outcome::{ChooseOutcome, Selection};
