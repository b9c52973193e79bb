//! Stats report rendering.

use crate::accounts::GameAccount;

use super::layout::ReportLayout;

/// Left-justify `value` in a field of `width` characters.
///
/// Values longer than `width` are kept whole.
///
/// ```
/// use game_rating::report::pad;
///
/// assert_eq!(pad("ab", 4), "ab  ");
/// assert_eq!(pad("abcdef", 4), "abcdef");
/// ```
#[must_use]
pub fn pad(value: impl std::fmt::Display, width: usize) -> String {
    format!("{:<width$}", value, width = width)
}

/// Render an account's stats: a player line, a header row, then one row
/// per history entry, oldest first. Every line ends with `\n`.
#[must_use]
pub fn render_stats(account: &GameAccount, layout: &ReportLayout) -> String {
    let w = &layout.widths;
    let mut report = String::new();

    report.push_str(&format!(
        "Player: {}, Rating: {}\n",
        account.user_name(),
        account.current_rating()
    ));
    report.push_str(&format!(
        "{}{}{}{}\n",
        pad(&layout.labels[0], w.game_index),
        pad(&layout.labels[1], w.opponent_name),
        pad(&layout.labels[2], w.outcome),
        pad(&layout.labels[3], w.rating),
    ));

    for entry in account.history() {
        report.push_str(&format!(
            "{}{}{}{}\n",
            pad(entry.game_index, w.game_index),
            pad(&entry.opponent_name, w.opponent_name),
            pad(layout.outcome_label(entry.outcome()), w.outcome),
            pad(entry.rating_delta, w.rating),
        ));
    }

    report
}
