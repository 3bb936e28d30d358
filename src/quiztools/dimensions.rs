//! Ordered dimension mapping and the dimension-list parser.
//!
//! DESIGN
//! ======
//! Evaluators break ties by declaration order, so the mapping is a
//! `Vec` of entries rather than a hash map. Quizzes declare a handful of
//! dimensions; linear lookup is fine at that size.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::QuizError;

/// Dimension name → accumulated score, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dimensions {
    entries: Vec<(String, f64)>,
}

impl Dimensions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Declare `name` with a zero score. Re-declaring keeps the first position.
    pub(crate) fn declare(&mut self, name: &str) {
        if !self.contains(name) {
            self.entries.push((name.to_owned(), 0.0));
        }
    }

    /// Add `delta` to a declared dimension. A sum that leaves the finite
    /// range is rejected and the stored score is left unchanged.
    pub(crate) fn add(&mut self, name: &str, delta: f64) -> Result<(), QuizError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .ok_or_else(|| QuizError::UnknownDimension { dimension: name.to_owned() })?;
        let sum = entry.1 + delta;
        if !sum.is_finite() {
            return Err(QuizError::InvalidValue {
                segment: format!("{name}:{delta}"),
                reason: format!("score for \"{name}\" overflows"),
            });
        }
        entry.1 = sum;
        Ok(())
    }
}

/// Later duplicates overwrite the value but keep the first position.
impl<S: Into<String>> FromIterator<(S, f64)> for Dimensions {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut dims = Self::new();
        for (name, value) in iter {
            let name = name.into();
            match dims.entries.iter_mut().find(|(n, _)| *n == name) {
                Some(entry) => entry.1 = value,
                None => dims.entries.push((name, value)),
            }
        }
        dims
    }
}

impl Serialize for Dimensions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Parse a comma-separated dimension list into a zeroed mapping.
///
/// Segments are trimmed. Empty segments are kept as the empty-string key.
#[must_use]
pub fn parse_dimensions(raw: &str) -> Dimensions {
    let mut dims = Dimensions::new();
    for name in raw.split(',').map(str::trim) {
        dims.declare(name);
    }
    dims
}

#[cfg(test)]
#[path = "dimensions_test.rs"]
mod tests;
