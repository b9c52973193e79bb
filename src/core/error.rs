//! Error types.
//!
//! Rating operations themselves never fail. The only fallible surface is
//! turning user-supplied names into game or account variants.

use thiserror::Error;

/// Failed to parse a variant name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown {kind} '{input}'")]
pub struct ParseKindError {
    /// What was being parsed ("game" or "account kind").
    pub kind: &'static str,
    /// The rejected input.
    pub input: String,
}

impl ParseKindError {
    pub(crate) fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = ParseKindError::new("game", "chess");
        assert_eq!(err.to_string(), "unknown game 'chess'");
    }
}
