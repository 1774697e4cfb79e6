use thiserror::Error;

use crate::session::{PhaseKind, SessionAction};

/// Reasons an uploaded question file is rejected.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("not an array")]
    NotAnArray,

    #[error("invalid question structure at index {index}")]
    InvalidQuestion { index: usize },
}

/// Session operations attempted where the current phase does not allow them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot {action} while {from}")]
    InvalidTransition {
        from: PhaseKind,
        action: SessionAction,
    },

    #[error("question set has no questions")]
    NoQuestions,

    #[error("choice {choice} is out of range for a question with {len} choices")]
    ChoiceOutOfRange { choice: usize, len: usize },

    #[error("question {index} is out of range for a set of {len}")]
    QuestionOutOfRange { index: usize, len: usize },
}
