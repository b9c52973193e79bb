//! Account bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::accounts::{AccountKind, GameAccount};

use super::py_games::PyGame;

/// Python wrapper for GameAccount.
#[pyclass(name = "GameAccount")]
#[derive(Clone, Debug)]
pub struct PyGameAccount(pub GameAccount);

#[pymethods]
impl PyGameAccount {
    /// Create an account.
    ///
    /// # Arguments
    /// - user_name: Account name
    /// - initial_rating: Starting rating (stored as given)
    /// - kind: "standard", "reduced-penalty" or "bonus-points"
    #[new]
    #[pyo3(signature = (user_name, initial_rating, kind = "standard"))]
    fn new(user_name: String, initial_rating: i32, kind: &str) -> PyResult<Self> {
        let kind: AccountKind = kind
            .parse()
            .map_err(|e: crate::core::ParseKindError| PyValueError::new_err(e.to_string()))?;
        Ok(Self(GameAccount::new(kind, user_name, initial_rating)))
    }

    #[getter]
    fn user_name(&self) -> &str {
        self.0.user_name()
    }

    #[getter]
    fn current_rating(&self) -> i32 {
        self.0.current_rating()
    }

    #[getter]
    fn games_count(&self) -> u32 {
        self.0.games_count()
    }

    #[getter]
    fn kind(&self) -> &'static str {
        self.0.kind().name()
    }

    /// Record a win against an opponent.
    fn win_game(&mut self, opponent_name: String, game: &PyGame) {
        self.0.win_game(opponent_name, game.0);
    }

    /// Record a loss against an opponent.
    fn lose_game(&mut self, opponent_name: String, game: &PyGame) {
        self.0.lose_game(opponent_name, game.0);
    }

    /// Apply the account kind's rating policy. Returns the amount added.
    fn update_rating(&mut self, game: &PyGame) -> i32 {
        self.0.update_rating(game.0)
    }

    /// History as a list of (opponent_name, won, rating_delta, game_index).
    fn history(&self) -> Vec<(String, bool, i32, u32)> {
        self.0
            .history()
            .iter()
            .map(|e| (e.opponent_name.clone(), e.won, e.rating_delta, e.game_index))
            .collect()
    }

    /// Formatted stats report.
    fn stats(&self) -> String {
        self.0.stats()
    }

    fn __repr__(&self) -> String {
        format!(
            "GameAccount(user={}, kind={}, rating={}, games={})",
            self.0.user_name(),
            self.0.kind(),
            self.0.current_rating(),
            self.0.games_count()
        )
    }
}
