//! Error types for the Mastermind core

use thiserror::Error;

/// Errors raised by the engine, the equivalence filter and the tree builder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MastermindError {
    /// Rules that cannot describe a game, or an unknown strategy name
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A codeword with an out-of-range peg or color
    #[error("invalid codeword: {0}")]
    Domain(String),

    /// The feedback history admits no secret, or a guess made no progress
    #[error("inconsistent state: {0}")]
    InconsistentState(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, MastermindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = MastermindError::Configuration("pegs must be at least 1".into());
        assert_eq!(err.to_string(), "invalid configuration: pegs must be at least 1");

        let err = MastermindError::Domain("color 7 out of range".into());
        assert_eq!(err.to_string(), "invalid codeword: color 7 out of range");

        let err = MastermindError::InconsistentState("no candidates".into());
        assert_eq!(err.to_string(), "inconsistent state: no candidates");
    }
}
