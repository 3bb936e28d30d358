//! Quiz tools — parsing, evaluation, and submission helpers.
//!
//! DESIGN
//! ======
//! Everything here is free of widget state so the container can call it
//! on each tabulation without caching parsed results.

pub mod add_command;
pub mod dimensions;
pub mod evaluator;
pub mod submitter;

pub use add_command::{Addition, parse_add_command};
pub use dimensions::{Dimensions, parse_dimensions};
pub use evaluator::{Evaluator, MaxEvaluator, ThresholdEvaluator};
pub use submitter::{DelaySubmitter, HttpSubmitter, Submitter};
