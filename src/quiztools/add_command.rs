//! Parser for a choice's add command (`"dimA:1.5, dimB:-2"`).

use serde::Serialize;

use crate::error::QuizError;

/// One `(dimension, delta)` pair from an add command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Addition {
    pub dimension: String,
    pub value: f64,
}

/// Parse a comma-separated list of `name:value` segments, in order.
///
/// Each segment splits on its first colon. Names and values are trimmed.
///
/// # Errors
///
/// Returns [`QuizError::InvalidValue`] when a segment has no colon, or its
/// value is not a finite number.
pub fn parse_add_command(raw: &str) -> Result<Vec<Addition>, QuizError> {
    raw.split(',').map(str::trim).map(parse_segment).collect()
}

fn parse_segment(segment: &str) -> Result<Addition, QuizError> {
    let invalid = |reason: &str| QuizError::InvalidValue { segment: segment.to_owned(), reason: reason.to_owned() };

    let (name, raw_value) = segment.split_once(':').ok_or_else(|| invalid("expected name:value"))?;
    let value: f64 = raw_value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseFloatError| invalid(&e.to_string()))?;
    if !value.is_finite() {
        return Err(invalid("value must be finite"));
    }

    Ok(Addition { dimension: name.trim().to_owned(), value })
}

#[cfg(test)]
#[path = "add_command_test.rs"]
mod tests;
