//! Per-account game history.
//!
//! History is append-only: entries are never edited, reordered or removed.
//! Only the owning account can append, so insertion order is chronological.

use serde::{Deserialize, Serialize};

/// Result of a recorded game, from the account's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Victory,
    Defeat,
}

impl Outcome {
    #[must_use]
    pub const fn from_won(won: bool) -> Self {
        if won {
            Outcome::Victory
        } else {
            Outcome::Defeat
        }
    }
}

/// One recorded game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistoryEntry {
    pub opponent_name: String,
    pub won: bool,
    /// Points taken from the game: win points for a victory, lose points
    /// for a defeat. This is the game's value, not the clamped change.
    pub rating_delta: i32,
    /// The account's game count when this entry was recorded (1-based).
    pub game_index: u32,
}

impl GameHistoryEntry {
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::from_won(self.won)
    }
}

/// Ordered, append-only record of an account's games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<GameHistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: GameHistoryEntry) -> &GameHistoryEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at position `index` (0-based, oldest first).
    pub fn get(&self, index: usize) -> Option<&GameHistoryEntry> {
        self.entries.get(index)
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&GameHistoryEntry> {
        self.entries.last()
    }

    /// Iterate oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, GameHistoryEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[GameHistoryEntry] {
        &self.entries
    }

    /// Number of recorded victories.
    pub fn wins(&self) -> usize {
        self.entries.iter().filter(|e| e.won).count()
    }

    /// Number of recorded defeats.
    pub fn losses(&self) -> usize {
        self.entries.len() - self.wins()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a GameHistoryEntry;
    type IntoIter = std::slice::Iter<'a, GameHistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(opponent: &str, won: bool, index: u32) -> GameHistoryEntry {
        GameHistoryEntry {
            opponent_name: opponent.to_string(),
            won,
            rating_delta: 10,
            game_index: index,
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let mut history = History::new();
        assert!(history.is_empty());

        history.push(entry("a", true, 1));
        history.push(entry("b", false, 2));
        history.push(entry("c", true, 3));

        let names: Vec<_> = history.iter().map(|e| e.opponent_name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(history.last().map(|e| e.game_index), Some(3));
        assert!(history.get(3).is_none());
    }

    #[test]
    fn test_win_loss_counts() {
        let mut history = History::new();
        history.push(entry("a", true, 1));
        history.push(entry("b", false, 2));
        history.push(entry("c", true, 3));

        assert_eq!(history.wins(), 2);
        assert_eq!(history.losses(), 1);
    }

    #[test]
    fn test_outcome() {
        assert_eq!(entry("a", true, 1).outcome(), Outcome::Victory);
        assert_eq!(entry("a", false, 1).outcome(), Outcome::Defeat);
    }
}
