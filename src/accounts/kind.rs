//! Account variants and their rating update policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ParseKindError;
use crate::games::Game;

/// Bonus added by `BonusPoints` accounts on every fifth game.
pub const BONUS_POINTS: i32 = 20;

/// `BonusPoints` accounts earn the bonus when `games_count` is a multiple of this.
pub const BONUS_INTERVAL: u32 = 5;

/// How an account adjusts its rating in `GameAccount::update_rating`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    /// Adds the game's full win points.
    #[default]
    Standard,
    /// Adds half the game's win points, truncated.
    ReducedPenalty,
    /// Adds the win points, plus `BONUS_POINTS` every `BONUS_INTERVAL` games.
    BonusPoints,
}

impl AccountKind {
    /// Every account variant.
    pub const ALL: [AccountKind; 3] = [
        AccountKind::Standard,
        AccountKind::ReducedPenalty,
        AccountKind::BonusPoints,
    ];

    /// Rating change this policy applies for `game`, given the account's
    /// current game count.
    ///
    /// ```
    /// use game_rating::{AccountKind, Game};
    ///
    /// assert_eq!(AccountKind::ReducedPenalty.rating_adjustment(Game::SinglePlayer, 3), 37);
    /// assert_eq!(AccountKind::BonusPoints.rating_adjustment(Game::Standard, 5), 120);
    /// assert_eq!(AccountKind::BonusPoints.rating_adjustment(Game::Standard, 6), 100);
    /// ```
    #[must_use]
    pub const fn rating_adjustment(self, game: Game, games_count: u32) -> i32 {
        let win = game.winning_rating();
        match self {
            AccountKind::Standard => win,
            AccountKind::ReducedPenalty => win / 2,
            AccountKind::BonusPoints => {
                let bonus = if games_count % BONUS_INTERVAL == 0 {
                    BONUS_POINTS
                } else {
                    0
                };
                win.saturating_add(bonus)
            }
        }
    }

    /// Canonical lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AccountKind::Standard => "standard",
            AccountKind::ReducedPenalty => "reduced-penalty",
            AccountKind::BonusPoints => "bonus-points",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AccountKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "standard" => Ok(AccountKind::Standard),
            "reduced-penalty" | "reducedpenalty" => Ok(AccountKind::ReducedPenalty),
            "bonus-points" | "bonuspoints" => Ok(AccountKind::BonusPoints),
            _ => Err(ParseKindError::new("account kind", s)),
        }
    }
}
