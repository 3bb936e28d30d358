//! Question widget — radio-style exclusivity over its child choices.
//!
//! DESIGN
//! ======
//! Checked state lives on the choices. The question never caches which
//! child is current; it scans its children on every query, so a host may
//! add or remove choices at any time.

use super::WidgetId;
use super::choice::{CheckSignal, Choice};

#[derive(Clone, Debug)]
pub struct Question {
    id: WidgetId,
    /// Prompt shown above the choices.
    pub text: String,
    choices: Vec<Choice>,
    pub(crate) disabled: bool,
    pub(crate) hidden: bool,
}

impl Question {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { id: WidgetId::new(), text: text.into(), choices: Vec::new(), disabled: false, hidden: false }
    }

    #[must_use]
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn push_choice(&mut self, choice: Choice) {
        self.choices.push(choice);
    }

    /// Remove a child choice, returning it if it was present.
    pub fn remove_choice(&mut self, id: WidgetId) -> Option<Choice> {
        let index = self.choices.iter().position(|c| c.id() == id)?;
        Some(self.choices.remove(index))
    }

    #[must_use]
    pub fn contains_choice(&self, id: WidgetId) -> bool {
        self.choices.iter().any(|c| c.id() == id)
    }

    #[must_use]
    pub fn choice(&self, id: WidgetId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id() == id)
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Check exactly `choice` and uncheck every sibling. An id that is not
    /// a child leaves every choice unchecked.
    pub fn check(&mut self, choice: WidgetId) {
        for node in &mut self.choices {
            node.checked = node.id() == choice;
        }
    }

    /// The checked child, if any.
    #[must_use]
    pub fn current_choice(&self) -> Option<&Choice> {
        self.choices.iter().find(|c| c.is_checked())
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.current_choice().is_some()
    }

    /// Apply a child's check signal and hand it on for the container.
    pub fn handle_check(&mut self, signal: CheckSignal) -> CheckSignal {
        self.check(signal.choice);
        signal
    }

    pub fn reset(&mut self) {
        for choice in &mut self.choices {
            choice.reset();
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Broadcast the question's disabled flag to every choice.
    pub fn refresh(&mut self) {
        for choice in &mut self.choices {
            choice.disabled = self.disabled;
        }
    }
}

#[cfg(test)]
#[path = "question_test.rs"]
mod tests;
