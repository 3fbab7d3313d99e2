//! Game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyIndexError;
use pyo3::prelude::*;

use crate::core::error::card_index;
use crate::core::{ConcentrationConfig, ConcentrationError};
use crate::cards::IdentifierFactory;
use crate::game::{ChooseOutcome, Concentration};
use crate::observation::{CardEncoder, FEATURES_PER_CARD};
use crate::players::{play_game, GameRecord, MemoryPlayer, PlayConfig, RandomPlayer};

use super::py_cards::PyCard;

impl From<ConcentrationError> for PyErr {
    fn from(err: ConcentrationError) -> Self {
        match err {
            ConcentrationError::IndexOutOfRange { .. } | ConcentrationError::NegativeIndex { .. } => {
                PyIndexError::new_err(err.to_string())
            }
        }
    }
}

/// Python wrapper for a Concentration game.
#[pyclass(name = "Concentration")]
pub struct PyConcentration {
    game: Concentration,
}

#[pymethods]
impl PyConcentration {
    /// Deal a new game.
    ///
    /// # Arguments
    /// - pair_count: Number of card pairs (deck holds twice as many cards)
    /// - seed: Shuffle seed; None seeds from the operating system
    #[new]
    #[pyo3(signature = (pair_count = 8, seed = None))]
    fn new(pair_count: usize, seed: Option<u64>) -> Self {
        let mut config = ConcentrationConfig::new(pair_count);
        config.seed = seed;
        Self {
            game: Concentration::from_config(&config, &mut IdentifierFactory::new()),
        }
    }

    /// Choose the card at `index`.
    ///
    /// Returns one of "inert", "already_face_up", "revealed", "matched",
    /// "mismatched". Raises IndexError when `index` is negative or out of
    /// range.
    fn choose_card(&mut self, index: isize) -> PyResult<&'static str> {
        let outcome = self.game.choose_card(card_index(index)?)?;
        Ok(match outcome {
            ChooseOutcome::Inert => "inert",
            ChooseOutcome::AlreadyFaceUp => "already_face_up",
            ChooseOutcome::Revealed(_) => "revealed",
            ChooseOutcome::Matched { .. } => "matched",
            ChooseOutcome::Mismatched { .. } => "mismatched",
        })
    }

    /// Snapshot of all cards in table order.
    #[getter]
    fn cards(&self) -> Vec<PyCard> {
        self.game.cards().iter().copied().map(PyCard).collect()
    }

    /// Index of the single face-up card awaiting a partner, if any.
    #[getter]
    fn face_up_index(&self) -> Option<usize> {
        self.game.face_up_index()
    }

    /// Number of pairs found so far.
    #[getter]
    fn matched_pair_count(&self) -> usize {
        self.game.matched_pair_count()
    }

    /// Whether every pair has been found.
    fn is_complete(&self) -> bool {
        self.game.is_complete()
    }

    /// Visible table as a `[cards, 4]` float32 array.
    fn observation<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f32>>> {
        let encoded = CardEncoder::new().encode(&self.game);
        let rows = self.game.len();
        // Reshape rather than build from rows so an empty deck stays `(0, 4)`.
        Ok(PyArray1::from_vec_bound(py, encoded.tensor).reshape([rows, FEATURES_PER_CARD])?)
    }

    /// Play the rest of the game automatically.
    ///
    /// `strategy` is "memory" or "random".
    #[pyo3(signature = (strategy = "memory", seed = 0, max_choices = 10_000))]
    fn autoplay(&mut self, strategy: &str, seed: u64, max_choices: usize) -> PyResult<PyGameRecord> {
        let config = PlayConfig::new().with_seed(seed).with_max_choices(max_choices);
        let record = match strategy {
            "memory" => play_game(&mut self.game, &mut MemoryPlayer::new(), &config)?,
            "random" => play_game(&mut self.game, &mut RandomPlayer, &config)?,
            other => {
                return Err(pyo3::exceptions::PyValueError::new_err(format!(
                    "unknown strategy: {other}"
                )))
            }
        };
        Ok(PyGameRecord(record))
    }

    fn __len__(&self) -> usize {
        self.game.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Concentration(cards={}, matched_pairs={}, face_up={:?})",
            self.game.len(),
            self.game.matched_pair_count(),
            self.game.face_up_index()
        )
    }
}

/// Python wrapper for GameRecord.
#[pyclass(name = "GameRecord")]
#[derive(Clone, Debug)]
pub struct PyGameRecord(pub GameRecord);

#[pymethods]
impl PyGameRecord {
    /// Number of choices (flips) made.
    #[getter]
    fn choices(&self) -> usize {
        self.0.choices
    }

    /// Pairs found.
    #[getter]
    fn matches(&self) -> usize {
        self.0.matches
    }

    /// Failed comparisons.
    #[getter]
    fn mismatches(&self) -> usize {
        self.0.mismatches
    }

    /// Whether the game finished.
    #[getter]
    fn completed(&self) -> bool {
        self.0.completed
    }

    fn __repr__(&self) -> String {
        format!(
            "GameRecord(choices={}, matches={}, mismatches={}, completed={})",
            self.0.choices, self.0.matches, self.0.mismatches, self.0.completed
        )
    }
}
