//! Rating bounds and clamping.
//!
//! Wins and losses keep an account's rating inside
//! `RATING_FLOOR..=RATING_CEILING`. Direct policy updates
//! (`GameAccount::update_rating`) bypass these bounds.

/// Lowest rating a loss can leave an account at.
pub const RATING_FLOOR: i32 = 1;

/// Highest rating a win can leave an account at.
pub const RATING_CEILING: i32 = 10;

/// Add win points, capped at `RATING_CEILING`.
///
/// Only the upper bound applies: a rating that starts below the floor
/// stays below it after a small win.
///
/// ```
/// use game_rating::core::rating::apply_win;
///
/// assert_eq!(apply_win(5, 100), 10);
/// assert_eq!(apply_win(-20, 5), -15);
/// ```
#[must_use]
pub const fn apply_win(rating: i32, points: i32) -> i32 {
    let raised = rating.saturating_add(points);
    if raised > RATING_CEILING {
        RATING_CEILING
    } else {
        raised
    }
}

/// Subtract loss points, floored at `RATING_FLOOR`.
#[must_use]
pub const fn apply_loss(rating: i32, points: i32) -> i32 {
    let lowered = rating.saturating_sub(points);
    if lowered < RATING_FLOOR {
        RATING_FLOOR
    } else {
        lowered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_caps_at_ceiling() {
        assert_eq!(apply_win(5, 100), RATING_CEILING);
        assert_eq!(apply_win(1000, 50), RATING_CEILING);
        assert_eq!(apply_win(3, 4), 7);
    }

    #[test]
    fn test_loss_floors_at_one() {
        assert_eq!(apply_loss(10, 50), RATING_FLOOR);
        assert_eq!(apply_loss(1200, 30), 1170);
    }

    #[test]
    fn test_no_overflow_at_extremes() {
        assert_eq!(apply_win(i32::MAX, 100), RATING_CEILING);
        assert_eq!(apply_loss(i32::MIN, 50), RATING_FLOOR);
    }
}
