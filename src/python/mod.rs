//! Python bindings for game-rating.
//!
//! # Quick Start
//!
//! ```python
//! import game_rating as gr
//!
//! standard = gr.Game("standard")
//! account = gr.GameAccount("Player1", 5, kind="bonus-points")
//!
//! account.win_game("Player2", standard)
//! print(account.stats())
//! ```

use pyo3::prelude::*;

mod py_accounts;
mod py_games;

pub use py_accounts::*;
pub use py_games::*;

/// game-rating: game accounts with rating policies and history reports.
#[pymodule]
fn game_rating(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add_class::<PyGameAccount>()?;

    m.add("RATING_FLOOR", crate::core::RATING_FLOOR)?;
    m.add("RATING_CEILING", crate::core::RATING_CEILING)?;

    Ok(())
}
