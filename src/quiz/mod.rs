//! Quiz container — drives questions and results through the quiz lifecycle.
//!
//! ARCHITECTURE
//! ============
//! The container owns a `Slot` of host-supplied children and re-discovers
//! questions and results from it on every action. Each action updates the
//! stage, then `refresh` re-applies the stage's visibility and disabled
//! flags top-down. Re-applying is idempotent, so hosts may call `refresh`
//! after mutating the slot themselves.
//!
//! ```text
//!   attach/reset ──► Interactive ──submit──► Loading ──ok──► Done
//!                         ▲                     │
//!                         │                     └──err──► Error
//!                         └──────── reset ◄───── Done / Error
//! ```
//!
//! TRADE-OFFS
//! ==========
//! `submit` holds `&mut self` across the submitter await, so nothing can
//! reset or re-submit while a submission is in flight. Dropping the submit
//! future is the only way to cancel; the quiz then stays in `Loading`
//! until the host calls `reset`.
//!
//! The completion handle settles once per quiz. Later finishes after a
//! reset still emit `Done`/`Error` events but do not settle it again.

pub mod events;
pub mod tabulation;

use std::fmt;
use std::sync::Arc;

use tokio::sync::{broadcast, oneshot};
use tracing::{debug, info, trace, warn};

use crate::error::QuizError;
use crate::quiztools::{DelaySubmitter, Evaluator, MaxEvaluator, Submitter};
use crate::widgets::{Choice, Question, ResultBlock, Slot, WidgetId};

pub use events::{Completion, QuizEvent};
pub use tabulation::{Tabulation, TabulationReport, tabulate};

const EVENT_CAPACITY: usize = 64;

// =============================================================================
// STAGE
// =============================================================================

/// Lifecycle stage of a quiz.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    /// Accepting answers.
    #[default]
    Interactive,
    /// Submitted; waiting on tabulation and the submitter.
    Loading,
    /// Finished; the matching result is revealed.
    Done,
    /// Tabulation or submission failed.
    Error,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Interactive => "interactive",
            Self::Loading => "loading",
            Self::Done => "done",
            Self::Error => "error",
        })
    }
}

/// How questions are shown while interactive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Every question at once.
    #[default]
    ShowAll,
    /// One question at a time, moved with `next` / `back`.
    Stepwise,
}

/// What a host should currently render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizView {
    pub stage: Stage,
    pub visible_questions: Vec<WidgetId>,
    pub visible_results: Vec<WidgetId>,
    pub submit_enabled: bool,
    pub question_index: usize,
    pub question_count: usize,
    pub can_go_back: bool,
    pub can_go_next: bool,
}

// =============================================================================
// QUIZ
// =============================================================================

pub struct Quiz {
    /// Comma-separated declared dimension names.
    dimensions: String,
    content: Slot,
    evaluator: Arc<dyn Evaluator>,
    submitter: Arc<dyn Submitter>,
    display_mode: DisplayMode,
    stage: Stage,
    frozen: bool,
    completed: bool,
    question_index: usize,
    result_label: String,
    tabulation: Option<Tabulation>,
    events: broadcast::Sender<QuizEvent>,
    settle: Option<oneshot::Sender<Result<Tabulation, QuizError>>>,
    completion: Option<Completion>,
}

impl Quiz {
    /// A quiz over `content` scoring the comma-separated `dimensions`.
    ///
    /// Uses the max-value evaluator and an immediate submitter until
    /// overridden.
    #[must_use]
    pub fn new(dimensions: impl Into<String>, content: Slot) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let (settle, rx) = oneshot::channel();
        Self {
            dimensions: dimensions.into(),
            content,
            evaluator: Arc::new(MaxEvaluator),
            submitter: Arc::new(DelaySubmitter::default()),
            display_mode: DisplayMode::default(),
            stage: Stage::Interactive,
            frozen: false,
            completed: false,
            question_index: 0,
            result_label: String::new(),
            tabulation: None,
            events,
            settle: Some(settle),
            completion: Some(Completion::new(rx)),
        }
    }

    #[must_use]
    pub fn with_evaluator(mut self, evaluator: Arc<dyn Evaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    #[must_use]
    pub fn with_submitter(mut self, submitter: Arc<dyn Submitter>) -> Self {
        self.submitter = submitter;
        self
    }

    #[must_use]
    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn dimensions(&self) -> &str {
        &self.dimensions
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Whether every question has a checked choice, as of the last refresh.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    /// Label of the last successful tabulation; empty until then.
    #[must_use]
    pub fn result_label(&self) -> &str {
        &self.result_label
    }

    #[must_use]
    pub fn tabulation(&self) -> Option<&Tabulation> {
        self.tabulation.as_ref()
    }

    #[must_use]
    pub fn content(&self) -> &Slot {
        &self.content
    }

    /// Mutable access for hosts that add or remove children. Call
    /// [`Quiz::refresh`] afterwards.
    pub fn content_mut(&mut self) -> &mut Slot {
        &mut self.content
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<QuizEvent> {
        self.events.subscribe()
    }

    /// Take the one-shot completion handle. Returns `None` once taken.
    pub fn completion(&mut self) -> Option<Completion> {
        self.completion.take()
    }

    /// Tabulate the current answers without changing any state.
    ///
    /// # Errors
    ///
    /// Returns the tabulation error for malformed or unknown add commands.
    pub fn tabulate(&self) -> Result<TabulationReport, QuizError> {
        tabulate(&self.dimensions, self.content.questions(), self.evaluator.as_ref())
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    /// First mount: reset the children and emit `Start`.
    pub fn attach(&mut self) {
        debug!(dimensions = %self.dimensions, "quiz attached");
        self.reset();
    }

    /// Route a user activation of `choice` through its question.
    ///
    /// Returns `Ok(false)` when the activation was ignored because the quiz
    /// is not interactive or the choice is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::UnknownChoice`] if no question holds `choice`.
    pub fn activate(&mut self, choice: WidgetId) -> Result<bool, QuizError> {
        if self.stage != Stage::Interactive || self.frozen {
            debug!(stage = %self.stage, %choice, "activation ignored");
            return Ok(false);
        }

        let question = self
            .content
            .question_for_choice_mut(choice)
            .ok_or(QuizError::UnknownChoice { id: choice })?;
        let Some(signal) = question.choice(choice).and_then(Choice::activate) else {
            return Ok(false);
        };
        let signal = question.handle_check(signal);
        let question_id = question.id();

        self.refresh();
        debug!(question = %question_id, choice = %signal.choice, completed = self.completed, "choice checked");
        self.emit(QuizEvent::Check { question: question_id, choice: signal.choice });
        Ok(true)
    }

    /// Freeze the quiz, tabulate, run the submitter, and finish.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::SubmitDisabled`] without any state change when
    /// the quiz is not interactive or not every question is answered. Any
    /// tabulation or submitter error is returned after the quiz enters
    /// [`Stage::Error`].
    pub async fn submit(&mut self) -> Result<Tabulation, QuizError> {
        self.refresh();
        if self.stage != Stage::Interactive {
            return Err(QuizError::SubmitDisabled { reason: format!("quiz is {}", self.stage) });
        }
        if !self.completed {
            let total = self.content.questions().count();
            let answered = self.content.questions().filter(|q| q.is_answered()).count();
            return Err(QuizError::SubmitDisabled {
                reason: format!("{answered} of {total} questions answered"),
            });
        }

        self.frozen = true;
        self.stage = Stage::Loading;
        self.refresh();
        info!(dimensions = %self.dimensions, "quiz submitted");

        match self.run_submission().await {
            Ok(tabulation) => {
                self.finish(tabulation.clone());
                Ok(tabulation)
            }
            Err(error) => {
                self.fail(error.clone());
                Err(error)
            }
        }
    }

    /// Clear answers and results and return to `Interactive`, from any stage.
    pub fn reset(&mut self) {
        if self.stage == Stage::Loading {
            warn!("reset abandoned an in-flight submission");
        }

        self.result_label.clear();
        self.tabulation = None;
        self.frozen = false;
        self.question_index = 0;
        self.stage = Stage::Interactive;
        for question in self.content.questions_mut() {
            question.reset();
        }
        self.refresh();

        info!(questions = self.content.questions().count(), "quiz started");
        self.emit(QuizEvent::Start);
    }

    /// Stepwise mode: move to the next question.
    pub fn next(&mut self) -> bool {
        if !self.can_step() || self.question_index + 1 >= self.content.questions().count() {
            return false;
        }
        self.question_index += 1;
        self.refresh();
        true
    }

    /// Stepwise mode: move to the previous question.
    pub fn back(&mut self) -> bool {
        if !self.can_step() || self.question_index == 0 {
            return false;
        }
        self.question_index -= 1;
        self.refresh();
        true
    }

    /// Re-apply the current stage to every child.
    pub fn refresh(&mut self) {
        let total = self.content.questions().count();
        self.completed = self.content.questions().all(Question::is_answered);
        self.question_index = self.question_index.min(total.saturating_sub(1));

        let stage = self.stage;
        let frozen = self.frozen;
        let stepwise = self.display_mode == DisplayMode::Stepwise;
        let index = self.question_index;
        for (i, question) in self.content.questions_mut().enumerate() {
            question.hidden = match stage {
                Stage::Interactive => stepwise && i != index,
                Stage::Loading | Stage::Done | Stage::Error => true,
            };
            question.set_disabled(frozen);
            question.refresh();
        }

        let label = &self.result_label;
        for result in self.content.results_mut() {
            result.hidden = !(stage == Stage::Done && result.matches(label));
        }
    }

    /// Snapshot of what is visible and enabled.
    #[must_use]
    pub fn view(&self) -> QuizView {
        let question_count = self.content.questions().count();
        let stepping = self.can_step();
        QuizView {
            stage: self.stage,
            visible_questions: self.content.questions().filter(|q| !q.is_hidden()).map(Question::id).collect(),
            visible_results: self.content.results().filter(|r| !r.is_hidden()).map(ResultBlock::id).collect(),
            submit_enabled: self.stage == Stage::Interactive && self.completed && !self.frozen,
            question_index: self.question_index,
            question_count,
            can_go_back: stepping && self.question_index > 0,
            can_go_next: stepping && self.question_index + 1 < question_count,
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn can_step(&self) -> bool {
        self.display_mode == DisplayMode::Stepwise && self.stage == Stage::Interactive
    }

    async fn run_submission(&self) -> Result<Tabulation, QuizError> {
        let tabulation = self.tabulate()?.into_complete()?;
        self.submitter.submit(&tabulation).await?;
        Ok(tabulation)
    }

    fn finish(&mut self, tabulation: Tabulation) {
        self.result_label = tabulation.result_label().to_owned();
        self.tabulation = Some(tabulation.clone());
        self.stage = Stage::Done;
        self.refresh();

        info!(result = %self.result_label, "quiz done");
        self.emit(QuizEvent::Done(tabulation.clone()));
        self.settle(Ok(tabulation));
    }

    fn fail(&mut self, error: QuizError) {
        self.stage = Stage::Error;
        self.refresh();

        warn!(error = %error, "quiz failed");
        self.emit(QuizEvent::Error { error: error.clone() });
        self.settle(Err(error));
    }

    fn settle(&mut self, outcome: Result<Tabulation, QuizError>) {
        let Some(tx) = self.settle.take() else {
            trace!("completion already settled");
            return;
        };
        if tx.send(outcome).is_err() {
            debug!("completion handle dropped before settlement");
        }
    }

    fn emit(&self, event: QuizEvent) {
        let name = event.name();
        if self.events.send(event).is_err() {
            trace!(event = name, "no quiz event listeners");
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
