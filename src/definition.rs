//! Declarative quiz definitions (YAML or JSON).
//!
//! DESIGN
//! ======
//! A definition is the serialized form of the markup a host would write:
//! the dimension list, questions with their choices' add commands, and
//! labelled result blocks. `build` turns it into a live `Quiz`.
//!
//! ```yaml
//! title: Coolness
//! dimensions: coolness
//! evaluator:
//!   kind: threshold
//!   dimension: coolness
//!   threshold: 0
//!   above: cool
//!   otherwise: uncool
//! questions:
//!   - text: Do you wear sunglasses indoors?
//!     choices:
//!       - { text: Always, add: "coolness:1" }
//!       - { text: Never, add: "coolness:-1" }
//! results:
//!   - { label: cool, text: You are cool. }
//!   - { label: uncool, text: Not so cool. }
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{DefinitionError, QuizError};
use crate::quiz::Quiz;
use crate::quiztools::{Evaluator, MaxEvaluator, ThresholdEvaluator, parse_add_command, parse_dimensions};
use crate::widgets::{Choice, Node, Question, ResultBlock, Slot};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizDefinition {
    #[serde(default)]
    pub title: String,
    /// Comma-separated dimension names.
    pub dimensions: String,
    #[serde(default)]
    pub evaluator: EvaluatorSpec,
    /// Free text shown above the questions.
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuestionDefinition>,
    #[serde(default)]
    pub results: Vec<ResultDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub text: String,
    #[serde(default)]
    pub choices: Vec<ChoiceDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceDefinition {
    pub text: String,
    #[serde(default)]
    pub add: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDefinition {
    pub label: String,
    #[serde(default)]
    pub text: String,
}

/// Which built-in evaluator scores the quiz.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EvaluatorSpec {
    /// Highest dimension wins.
    #[default]
    Max,
    Threshold {
        dimension: String,
        threshold: f64,
        above: String,
        otherwise: String,
    },
}

impl EvaluatorSpec {
    #[must_use]
    pub fn build(&self) -> Arc<dyn Evaluator> {
        match self {
            Self::Max => Arc::new(MaxEvaluator),
            Self::Threshold { dimension, threshold, above, otherwise } => Arc::new(ThresholdEvaluator {
                dimension: dimension.clone(),
                threshold: *threshold,
                above: above.clone(),
                otherwise: otherwise.clone(),
            }),
        }
    }
}

impl QuizDefinition {
    /// # Errors
    ///
    /// Returns [`DefinitionError::Parse`] for malformed YAML.
    pub fn from_yaml_str(raw: &str) -> Result<Self, DefinitionError> {
        serde_yaml::from_str(raw).map_err(|e| DefinitionError::Parse(e.to_string()))
    }

    /// # Errors
    ///
    /// Returns [`DefinitionError::Parse`] for malformed JSON.
    pub fn from_json_str(raw: &str) -> Result<Self, DefinitionError> {
        serde_json::from_str(raw).map_err(|e| DefinitionError::Parse(e.to_string()))
    }

    /// Load a definition file; `.json` files parse as JSON, anything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::Io`] if the file cannot be read, or
    /// [`DefinitionError::Parse`] if it does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| DefinitionError::Io { path: path.display().to_string(), source })?;
        if path.extension().is_some_and(|e| e == "json") {
            Self::from_json_str(&raw)
        } else {
            Self::from_yaml_str(&raw)
        }
    }

    /// Check every add command, and the threshold evaluator's dimension,
    /// against the declared dimensions.
    ///
    /// # Errors
    ///
    /// Returns the first malformed add command or unknown dimension.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let declared = parse_dimensions(&self.dimensions);
        if let EvaluatorSpec::Threshold { dimension, .. } = &self.evaluator {
            if !declared.contains(dimension) {
                return Err(QuizError::UnknownDimension { dimension: dimension.clone() }.into());
            }
        }
        let adds = self
            .questions
            .iter()
            .flat_map(|q| &q.choices)
            .filter_map(|c| c.add.as_deref())
            .filter(|a| !a.is_empty());
        for add in adds {
            for addition in parse_add_command(add)? {
                if !declared.contains(&addition.dimension) {
                    return Err(QuizError::UnknownDimension { dimension: addition.dimension }.into());
                }
            }
        }
        Ok(())
    }

    /// The widget tree this definition describes.
    #[must_use]
    pub fn slot(&self) -> Slot {
        let mut slot = Slot::new();
        if let Some(intro) = &self.intro {
            slot.push(Node::Content(intro.clone()));
        }
        for question in &self.questions {
            let mut node = Question::new(question.text.clone());
            for choice in &question.choices {
                let mut leaf = Choice::new(choice.text.clone());
                leaf.add.clone_from(&choice.add);
                node.push_choice(leaf);
            }
            slot.push(node);
        }
        for result in &self.results {
            slot.push(ResultBlock::new(result.label.clone(), result.text.clone()));
        }
        slot
    }

    /// Build an unattached quiz with this definition's evaluator.
    #[must_use]
    pub fn build(&self) -> Quiz {
        Quiz::new(self.dimensions.clone(), self.slot()).with_evaluator(self.evaluator.build())
    }
}

#[cfg(test)]
#[path = "definition_test.rs"]
mod tests;
