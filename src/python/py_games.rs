//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::games::Game;

/// Python wrapper for Game.
#[pyclass(name = "Game")]
#[derive(Clone, Debug)]
pub struct PyGame(pub Game);

#[pymethods]
impl PyGame {
    /// Create a game from its variant name.
    ///
    /// Accepts "standard", "training" or "single-player".
    #[new]
    #[pyo3(signature = (kind = "standard"))]
    fn new(kind: &str) -> PyResult<Self> {
        kind.parse::<Game>()
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Points added on a win.
    #[getter]
    fn winning_rating(&self) -> i32 {
        self.0.winning_rating()
    }

    /// Points subtracted on a loss.
    #[getter]
    fn losing_rating(&self) -> i32 {
        self.0.losing_rating()
    }

    #[getter]
    fn kind(&self) -> &'static str {
        self.0.name()
    }

    fn __repr__(&self) -> String {
        format!("Game({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0 as u64
    }
}
