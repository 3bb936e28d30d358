//! Quiz widgets — choice, question, result, and the slot that holds them.
//!
//! DESIGN
//! ======
//! Widgets are headless state: a host renders them however it likes and
//! routes user activation back through the quiz container. Each widget
//! carries a `WidgetId` so signals can reference it without borrowing.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod choice;
pub mod question;
pub mod result;
pub mod slot;

pub use choice::{CheckSignal, Choice};
pub use question::Question;
pub use result::{ResultBlock, labels_match};
pub use slot::{Node, Slot};

/// Reference identity of a widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(Uuid);

impl WidgetId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
