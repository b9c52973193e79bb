//! Game account: identity, rating, game count and history.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::rating::{apply_loss, apply_win};
use crate::games::Game;
use crate::report::{render_stats, ReportLayout};

use super::history::{GameHistoryEntry, History};
use super::kind::AccountKind;

/// A player account whose rating moves with each recorded game.
///
/// There are two independent ways to change the rating:
///
/// - `win_game` / `lose_game` record a game: they clamp the rating to
///   `RATING_FLOOR..=RATING_CEILING`, bump `games_count` and append history.
/// - `update_rating` applies the account kind's policy directly. It is
///   unclamped and leaves `games_count` and history alone.
///
/// The initial rating is stored as given, even if it lies outside the bounds.
///
/// ## Example
///
/// ```
/// use game_rating::{GameAccount, Game};
///
/// let mut account = GameAccount::standard("Player1", 5);
/// account.win_game("Player2", Game::standard());
///
/// assert_eq!(account.current_rating(), 10);
/// assert_eq!(account.games_count(), 1);
/// assert_eq!(account.history().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAccount {
    user_name: String,
    current_rating: i32,
    games_count: u32,
    kind: AccountKind,
    history: History,
}

impl GameAccount {
    /// Create an account with no games played.
    pub fn new(kind: AccountKind, user_name: impl Into<String>, initial_rating: i32) -> Self {
        Self {
            user_name: user_name.into(),
            current_rating: initial_rating,
            games_count: 0,
            kind,
            history: History::new(),
        }
    }

    pub fn standard(user_name: impl Into<String>, initial_rating: i32) -> Self {
        Self::new(AccountKind::Standard, user_name, initial_rating)
    }

    pub fn reduced_penalty(user_name: impl Into<String>, initial_rating: i32) -> Self {
        Self::new(AccountKind::ReducedPenalty, user_name, initial_rating)
    }

    pub fn bonus_points(user_name: impl Into<String>, initial_rating: i32) -> Self {
        Self::new(AccountKind::BonusPoints, user_name, initial_rating)
    }

    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    #[must_use]
    pub fn current_rating(&self) -> i32 {
        self.current_rating
    }

    #[must_use]
    pub fn games_count(&self) -> u32 {
        self.games_count
    }

    #[must_use]
    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Record a win against `opponent_name`.
    ///
    /// Adds the game's win points, capped at `RATING_CEILING`.
    pub fn win_game(&mut self, opponent_name: impl Into<String>, game: Game) -> &GameHistoryEntry {
        let points = game.winning_rating();
        self.current_rating = apply_win(self.current_rating, points);
        self.record(opponent_name.into(), true, points, game)
    }

    /// Record a loss against `opponent_name`.
    ///
    /// Subtracts the game's lose points, floored at `RATING_FLOOR`.
    pub fn lose_game(&mut self, opponent_name: impl Into<String>, game: Game) -> &GameHistoryEntry {
        let points = game.losing_rating();
        self.current_rating = apply_loss(self.current_rating, points);
        self.record(opponent_name.into(), false, points, game)
    }

    fn record(&mut self, opponent_name: String, won: bool, points: i32, game: Game) -> &GameHistoryEntry {
        self.games_count += 1;
        debug!(
            "[ACCOUNT] {} {} vs {} ({} game, {} pts) -> rating {}, game #{}",
            self.user_name,
            if won { "won" } else { "lost" },
            opponent_name,
            game,
            points,
            self.current_rating,
            self.games_count
        );
        self.history.push(GameHistoryEntry {
            opponent_name,
            won,
            rating_delta: points,
            game_index: self.games_count,
        })
    }

    /// Apply this account kind's rating policy for `game`.
    ///
    /// Unclamped. Does not count as a game and adds no history.
    /// Returns the amount added to the rating.
    pub fn update_rating(&mut self, game: Game) -> i32 {
        let delta = self.kind.rating_adjustment(game, self.games_count);
        self.current_rating = self.current_rating.saturating_add(delta);
        debug!(
            "[ACCOUNT] {} ({}) policy update from {} game: {:+} -> rating {}",
            self.user_name, self.kind, game, delta, self.current_rating
        );
        delta
    }

    /// Formatted stats report using the default layout.
    #[must_use]
    pub fn stats(&self) -> String {
        self.stats_with(&ReportLayout::default())
    }

    /// Formatted stats report using `layout`.
    #[must_use]
    pub fn stats_with(&self, layout: &ReportLayout) -> String {
        render_stats(self, layout)
    }
}
