//! Lifecycle signals emitted by a quiz container.

use tokio::sync::oneshot;

use super::tabulation::Tabulation;
use crate::error::QuizError;
use crate::widgets::WidgetId;

#[derive(Debug, Clone, PartialEq)]
pub enum QuizEvent {
    /// The quiz was (re)started and is accepting answers.
    Start,
    /// A choice was checked inside a question.
    Check { question: WidgetId, choice: WidgetId },
    /// The quiz finished; carries the dimensions and result label.
    Done(Tabulation),
    /// Tabulation or submission failed.
    Error { error: QuizError },
}

impl QuizEvent {
    /// Wire name of the signal.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "quiz-start",
            Self::Check { .. } => "check",
            Self::Done(_) => "quiz-done",
            Self::Error { .. } => "quiz-error",
        }
    }
}

/// Receiving half of a quiz's one-shot completion.
#[derive(Debug)]
pub struct Completion {
    rx: oneshot::Receiver<Result<Tabulation, QuizError>>,
}

impl Completion {
    pub(crate) fn new(rx: oneshot::Receiver<Result<Tabulation, QuizError>>) -> Self {
        Self { rx }
    }

    /// Wait for the quiz to finish.
    ///
    /// # Errors
    ///
    /// Returns the error that sent the quiz into its error state, or
    /// [`QuizError::Abandoned`] if the quiz was dropped first.
    pub async fn wait(self) -> Result<Tabulation, QuizError> {
        self.rx.await.map_err(|_| QuizError::Abandoned)?
    }
}
