//! Error types shared by the quiz tools, widgets, and container.
//!
//! DESIGN
//! ======
//! `QuizError` is `Clone` so it can ride on broadcast `QuizEvent::Error`
//! payloads and still be returned from the failing action. Underlying
//! causes are flattened to strings at the boundary for the same reason.

use crate::widgets::WidgetId;

// =============================================================================
// QUIZ ERROR
// =============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuizError {
    /// An add command referenced a dimension the quiz never declared.
    #[error("can't add to unknown dimension \"{dimension}\"")]
    UnknownDimension { dimension: String },

    /// An add-command segment did not carry a finite number.
    #[error("invalid add command segment \"{segment}\": {reason}")]
    InvalidValue { segment: String, reason: String },

    /// Strict tabulation was requested while questions remain unanswered.
    #[error("quiz incomplete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    /// The submit action is not available in the current state.
    #[error("submit is disabled: {reason}")]
    SubmitDisabled { reason: String },

    /// No choice with this id exists among the quiz's questions.
    #[error("no choice with id {id}")]
    UnknownChoice { id: WidgetId },

    /// The submitter rejected the tabulation.
    #[error("submission failed: {0}")]
    Submit(String),

    /// The quiz was dropped before its completion settled.
    #[error("quiz dropped before completion")]
    Abandoned,
}

// =============================================================================
// SUBMIT ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The HTTP request could not be built or sent.
    #[error("submit request failed: {0}")]
    Http(String),

    /// The endpoint answered with a non-success status.
    #[error("submit endpoint returned status {status}")]
    Status { status: u16, body: String },

    /// A custom submitter refused the tabulation.
    #[error("submission rejected: {0}")]
    Rejected(String),
}

impl From<SubmitError> for QuizError {
    fn from(err: SubmitError) -> Self {
        Self::Submit(err.to_string())
    }
}

// =============================================================================
// DEFINITION ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("failed to read quiz definition {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse quiz definition: {0}")]
    Parse(String),

    /// The definition parsed but describes an unplayable quiz.
    #[error("invalid quiz definition: {0}")]
    Invalid(#[from] QuizError),
}
