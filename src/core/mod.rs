//! Shared building blocks: rating bounds and error types.

pub mod error;
pub mod rating;

pub use error::ParseKindError;
pub use rating::{RATING_CEILING, RATING_FLOOR};
