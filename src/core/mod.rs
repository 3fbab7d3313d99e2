//! Core types: errors, RNG, configuration.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{ConcentrationConfig, DEFAULT_PAIR_COUNT};
pub use error::{ConcentrationError, Result};
pub use rng::GameRng;
