//! Tabulation — sum the selected choices' add commands into dimensions.
//!
//! DESIGN
//! ======
//! A fresh mapping is built from the declared dimension list on every
//! call, so a failed tabulation never leaves partial sums behind. The
//! returned `Tabulation` has no mutators.
//!
//! TRADE-OFFS
//! ==========
//! Unanswered questions are tolerated here and reported through
//! `TabulationReport`; the quiz's submit action is where incompleteness
//! becomes a hard stop.

use serde::Serialize;

use crate::error::QuizError;
use crate::quiztools::{Dimensions, Evaluator, parse_add_command, parse_dimensions};
use crate::widgets::Question;

/// Sealed snapshot of dimension scores and the derived result label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tabulation {
    dimensions: Dimensions,
    result_label: String,
}

impl Tabulation {
    pub(crate) fn new(dimensions: Dimensions, result_label: String) -> Self {
        Self { dimensions, result_label }
    }

    #[must_use]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    #[must_use]
    pub fn result_label(&self) -> &str {
        &self.result_label
    }
}

/// A tabulation plus how many questions contributed to it.
#[derive(Debug, Clone, PartialEq)]
pub struct TabulationReport {
    pub tabulation: Tabulation,
    pub answered: usize,
    pub total: usize,
}

impl TabulationReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answered == self.total
    }

    /// The tabulation, if every question was answered.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::Incomplete`] otherwise.
    pub fn into_complete(self) -> Result<Tabulation, QuizError> {
        if self.is_complete() {
            Ok(self.tabulation)
        } else {
            Err(QuizError::Incomplete { answered: self.answered, total: self.total })
        }
    }
}

/// Tabulate `questions` against the `declared` dimension list.
///
/// # Errors
///
/// Returns [`QuizError::InvalidValue`] for a malformed add command and
/// [`QuizError::UnknownDimension`] when one names an undeclared dimension.
pub fn tabulate<'a>(
    declared: &str,
    questions: impl IntoIterator<Item = &'a Question>,
    evaluator: &dyn Evaluator,
) -> Result<TabulationReport, QuizError> {
    let mut dimensions = parse_dimensions(declared);
    let mut answered = 0;
    let mut total = 0;

    for question in questions {
        total += 1;
        let Some(choice) = question.current_choice() else {
            continue;
        };
        if let Some(add) = choice.add_command() {
            for addition in parse_add_command(add)? {
                dimensions.add(&addition.dimension, addition.value)?;
            }
        }
        answered += 1;
    }

    let result_label = evaluator.evaluate(&dimensions);
    Ok(TabulationReport { tabulation: Tabulation::new(dimensions, result_label), answered, total })
}

#[cfg(test)]
#[path = "tabulation_test.rs"]
mod tests;
