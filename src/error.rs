//! Error types for the card server.
//!
//! Nothing in the card is fatal: route handlers turn these into small red
//! HTML fragments and the page keeps working.

use thiserror::Error;

/// Errors raised while configuring the card or decoding host reports.
#[derive(Debug, Error)]
pub enum CardError {
    /// The JSON content override could not be parsed.
    #[error("Invalid card config: {0}")]
    Config(#[from] serde_json::Error),

    /// The narrative track needs one line per automatic step.
    #[error("Narrative needs {expected} lines, found {found}")]
    NarrativeLength { expected: usize, found: usize },

    /// The confirmation track needs one prompt per escalation step.
    #[error("Confirmation needs {expected} escalation prompts, found {found}")]
    EscalationLength { expected: usize, found: usize },

    /// Audio volume outside `0.0..=1.0`.
    #[error("Audio volume must be between 0 and 1, got {0}")]
    InvalidVolume(f32),

    /// The host reported a share outcome we don't know.
    #[error("Unknown share outcome: {0}")]
    UnknownShareOutcome(String),

    /// A timer beacon carried something that isn't a timer id.
    #[error("Invalid timer id: {0:?}")]
    InvalidTimerId(String),
}

/// Result type for card operations.
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_wraps_serde() {
        let err: CardError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(err.to_string().starts_with("Invalid card config"));
    }

    #[test]
    fn length_errors_name_both_counts() {
        let err = CardError::NarrativeLength {
            expected: 8,
            found: 3,
        };
        assert_eq!(err.to_string(), "Narrative needs 8 lines, found 3");
    }
}
