//! Game accounts and their rating policies.
//!
//! - `GameAccount`: the stateful entity (name, rating, game count, history)
//! - `AccountKind`: closed set of `update_rating` policies
//! - `History` / `GameHistoryEntry`: append-only record of games played

mod account;
pub mod history;
pub mod kind;

pub use account::GameAccount;
pub use history::{GameHistoryEntry, History, Outcome};
pub use kind::{AccountKind, BONUS_INTERVAL, BONUS_POINTS};
