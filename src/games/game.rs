//! Game variant table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ParseKindError;

/// Points a game awards on a win and deducts on a loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GamePoints {
    /// Added to the winner's rating.
    pub win: i32,
    /// Subtracted from the loser's rating.
    pub lose: i32,
}

impl GamePoints {
    #[must_use]
    pub const fn new(win: i32, lose: i32) -> Self {
        Self { win, lose }
    }
}

/// The kind of game played.
///
/// Variants differ only in their point values:
///
/// | Variant      | Win | Lose |
/// |--------------|-----|------|
/// | Standard     | 100 | 50   |
/// | Training     | 50  | 25   |
/// | SinglePlayer | 75  | 30   |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Game {
    Standard,
    Training,
    SinglePlayer,
}

impl Game {
    /// Every game variant, in table order.
    pub const ALL: [Game; 3] = [Game::Standard, Game::Training, Game::SinglePlayer];

    /// Create a standard game.
    #[must_use]
    pub const fn standard() -> Self {
        Game::Standard
    }

    /// Create a training game.
    #[must_use]
    pub const fn training() -> Self {
        Game::Training
    }

    /// Create a single-player game.
    #[must_use]
    pub const fn single_player() -> Self {
        Game::SinglePlayer
    }

    /// Point values for this variant.
    #[must_use]
    pub const fn points(self) -> GamePoints {
        match self {
            Game::Standard => GamePoints::new(100, 50),
            Game::Training => GamePoints::new(50, 25),
            Game::SinglePlayer => GamePoints::new(75, 30),
        }
    }

    /// Points added to the rating on a win.
    #[must_use]
    pub const fn winning_rating(self) -> i32 {
        self.points().win
    }

    /// Points subtracted from the rating on a loss.
    #[must_use]
    pub const fn losing_rating(self) -> i32 {
        self.points().lose
    }

    /// Canonical lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Game::Standard => "standard",
            Game::Training => "training",
            Game::SinglePlayer => "single-player",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Game {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Game::Standard),
            "training" => Ok(Game::Training),
            "single-player" | "single_player" | "singleplayer" => Ok(Game::SinglePlayer),
            _ => Err(ParseKindError::new("game", s)),
        }
    }
}
