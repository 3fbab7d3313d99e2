//! Card bindings for Python.

use pyo3::prelude::*;

use crate::cards::Card;

/// Python wrapper for Card (read-only snapshot).
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Whether the symbol is visible.
    #[getter]
    fn is_face_up(&self) -> bool {
        self.0.is_face_up
    }

    /// Whether the card's pair has been found.
    #[getter]
    fn is_matched(&self) -> bool {
        self.0.is_matched
    }

    /// Pairing key.
    #[getter]
    fn identifier(&self) -> u64 {
        self.0.identifier.raw()
    }

    /// Whether `other` is this card's partner.
    fn is_pair_of(&self, other: &Self) -> bool {
        self.0.is_pair_of(&other.0)
    }

    fn __repr__(&self) -> String {
        format!(
            "Card(identifier={}, face_up={}, matched={})",
            self.0.identifier.raw(),
            self.0.is_face_up,
            self.0.is_matched
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
