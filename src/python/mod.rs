//! Python bindings for the Concentration game model.
//!
//! Built with the `python` feature.
//!
//! # Quick Start
//!
//! ```python
//! import concentration
//!
//! game = concentration.Concentration(pair_count=6, seed=42)
//! game.choose_card(0)
//! print(game.cards[0], game.face_up_index)
//!
//! obs = game.observation()   # numpy float32, shape (12, 4)
//! record = game.autoplay(strategy="memory")
//! assert game.is_complete()
//! ```

use pyo3::prelude::*;

mod py_cards;
mod py_game;

pub use py_cards::*;
pub use py_game::*;

/// concentration: a memory-matching card game model.
#[pymodule]
fn concentration(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyConcentration>()?;
    m.add_class::<PyGameRecord>()?;

    Ok(())
}
