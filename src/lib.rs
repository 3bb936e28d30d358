//! Headless personality-quiz engine.
//!
//! A quiz is a container of questions and labelled result blocks. Each
//! choice carries an add command (`"dimension:value, ..."`) that feeds a
//! set of named numeric dimensions. On submit the container tabulates the
//! checked choices, asks an evaluator for a result label, hands the
//! tabulation to a submitter, and reveals the result block whose label
//! matches.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`quiztools`] | Dimension and add-command parsing, evaluators, submitters |
//! | [`widgets`] | Choice, question, and result widget state plus the content slot |
//! | [`quiz`] | The quiz container, its lifecycle stages, events, and tabulation |
//! | [`definition`] | YAML / JSON quiz definitions that build a [`Quiz`] |
//! | [`config`] | Environment-driven runtime configuration |
//! | [`error`] | Error types |

pub mod config;
pub mod definition;
pub mod error;
pub mod quiz;
pub mod quiztools;
pub mod widgets;

pub use config::QuizzlyConfig;
pub use definition::QuizDefinition;
pub use error::{DefinitionError, QuizError, SubmitError};
pub use quiz::{Completion, DisplayMode, Quiz, QuizEvent, QuizView, Stage, Tabulation, TabulationReport};
pub use widgets::WidgetId;
