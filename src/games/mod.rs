//! Game variants and the points they award.
//!
//! A `Game` is a pure policy source: each variant carries a fixed number
//! of points added on a win and subtracted on a loss. Games hold no state
//! and are passed by value into account operations.

mod game;

pub use game::{Game, GamePoints};
