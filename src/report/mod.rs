//! Text reports for game accounts.
//!
//! `ReportLayout` configures column widths and labels; `render_stats`
//! turns an account into a fixed-width table.

mod layout;
mod stats;

pub use layout::{ColumnWidths, ReportLayout};
pub use stats::{pad, render_stats};
