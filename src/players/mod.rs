//! Automated players and the play loop.
//!
//! ## Overview
//!
//! - **Policies**: `Player` trait with `RandomPlayer` and `MemoryPlayer`
//! - **Play loop**: `play_game` runs a game to completion and returns a `GameRecord`
//!
//! ## Usage
//!
//! ```
//! use concentration::game::Concentration;
//! use concentration::players::{play_game, MemoryPlayer, PlayConfig};
//!
//! let mut game = Concentration::with_seed(6, 42);
//! let record = play_game(&mut game, &mut MemoryPlayer::new(), &PlayConfig::default())?;
//!
//! assert!(record.completed);
//! assert_eq!(record.matches, 6);
//! # Ok::<(), concentration::core::ConcentrationError>(())
//! ```

pub mod policy;
pub mod session;

pub use policy::{candidates, MemoryPlayer, Player, RandomPlayer};
pub use session::{play_game, GameRecord, PlayConfig};
