//! Observation encoding for learning agents.
//!
//! - **Tensor**: `EncodedState` flat data plus shape
//! - **Encoding**: `CardEncoder` turns the visible table into a `[cards, 4]` tensor

pub mod encoder;
pub mod tensor;

pub use encoder::{CardEncoder, FEATURES_PER_CARD};
pub use tensor::EncodedState;
