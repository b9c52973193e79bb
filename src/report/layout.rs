//! Report layout configuration.

use serde::{Deserialize, Serialize};

use crate::accounts::Outcome;

/// Widths of the four report columns, in characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnWidths {
    pub game_index: usize,
    pub opponent_name: usize,
    pub outcome: usize,
    pub rating: usize,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            game_index: 10,
            opponent_name: 15,
            outcome: 10,
            rating: 10,
        }
    }
}

/// Layout of a stats report.
///
/// The default reproduces the standard report:
///
/// ```text
/// Player: Player1, Rating: 10
/// GameIndex OpponentName   Outcome   Rating    
/// 1         Player2        Victory   100       
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLayout {
    pub widths: ColumnWidths,

    /// Header labels: game index, opponent, outcome, rating.
    pub labels: [String; 4],

    pub victory_label: String,
    pub defeat_label: String,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            widths: ColumnWidths::default(),
            labels: [
                "GameIndex".to_string(),
                "OpponentName".to_string(),
                "Outcome".to_string(),
                "Rating".to_string(),
            ],
            victory_label: "Victory".to_string(),
            defeat_label: "Defeat".to_string(),
        }
    }
}

impl ReportLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all column widths.
    #[must_use]
    pub fn with_widths(mut self, widths: ColumnWidths) -> Self {
        self.widths = widths;
        self
    }

    /// Set the header labels.
    #[must_use]
    pub fn with_labels(
        mut self,
        game_index: impl Into<String>,
        opponent_name: impl Into<String>,
        outcome: impl Into<String>,
        rating: impl Into<String>,
    ) -> Self {
        self.labels = [
            game_index.into(),
            opponent_name.into(),
            outcome.into(),
            rating.into(),
        ];
        self
    }

    /// Set the words used for wins and losses.
    #[must_use]
    pub fn with_outcome_labels(mut self, victory: impl Into<String>, defeat: impl Into<String>) -> Self {
        self.victory_label = victory.into();
        self.defeat_label = defeat.into();
        self
    }

    /// Label for an outcome.
    #[must_use]
    pub fn outcome_label(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::Victory => &self.victory_label,
            Outcome::Defeat => &self.defeat_label,
        }
    }
}
