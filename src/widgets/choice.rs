//! Choice widget — a selectable leaf inside a question.

use super::WidgetId;

/// Emitted by an enabled choice when the user activates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckSignal {
    pub choice: WidgetId,
}

#[derive(Clone, Debug)]
pub struct Choice {
    id: WidgetId,
    /// Label shown to the user.
    pub text: String,
    /// Add command applied when this choice is the question's answer.
    pub add: Option<String>,
    pub(crate) checked: bool,
    pub(crate) disabled: bool,
}

impl Choice {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { id: WidgetId::new(), text: text.into(), add: None, checked: false, disabled: false }
    }

    #[must_use]
    pub fn with_add(mut self, add: impl Into<String>) -> Self {
        self.add = Some(add.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Add command, if present and non-empty.
    #[must_use]
    pub fn add_command(&self) -> Option<&str> {
        self.add.as_deref().filter(|a| !a.is_empty())
    }

    /// User activation. Disabled choices stay silent; checking is the
    /// enclosing question's decision.
    #[must_use]
    pub fn activate(&self) -> Option<CheckSignal> {
        if self.disabled {
            None
        } else {
            Some(CheckSignal { choice: self.id })
        }
    }

    pub fn reset(&mut self) {
        self.checked = false;
        self.disabled = false;
    }
}

#[cfg(test)]
#[path = "choice_test.rs"]
mod tests;
