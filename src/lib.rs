//! # game-rating
//!
//! Game accounts whose rating changes after each recorded game, with a
//! formatted per-account history report.
//!
//! ## Model
//!
//! - **Games** are policy sources: each variant awards fixed win points and
//!   deducts fixed lose points.
//! - **Accounts** own a name, a rating, a game counter and an append-only
//!   history. Recording a win or loss clamps the rating to
//!   `RATING_FLOOR..=RATING_CEILING`; the per-kind `update_rating` policy
//!   does not.
//! - **Reports** render an account as a fixed-width text table.
//!
//! Every operation is infallible and synchronous. Accounts are plain owned
//! values with no interior mutability.
//!
//! ## Modules
//!
//! - `core`: rating bounds, error types
//! - `games`: game variants and point table
//! - `accounts`: accounts, rating policies, history
//! - `report`: report layout and rendering
//! - `demo`: demonstration game sequence

pub mod core;
pub mod games;
pub mod accounts;
pub mod report;
pub mod demo;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{ParseKindError, RATING_CEILING, RATING_FLOOR};

pub use crate::games::{Game, GamePoints};

pub use crate::accounts::{
    AccountKind, GameAccount, GameHistoryEntry, History, Outcome,
    BONUS_INTERVAL, BONUS_POINTS,
};

pub use crate::report::{render_stats, ColumnWidths, ReportLayout};
