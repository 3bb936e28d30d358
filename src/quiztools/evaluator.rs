//! Evaluators map a finished dimension snapshot to a result label.

use super::dimensions::Dimensions;

/// Pluggable result policy. Any `Fn(&Dimensions) -> String` qualifies.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, dimensions: &Dimensions) -> String;
}

impl<F> Evaluator for F
where
    F: Fn(&Dimensions) -> String + Send + Sync,
{
    fn evaluate(&self, dimensions: &Dimensions) -> String {
        self(dimensions)
    }
}

/// Picks the dimension with the strictly greatest value.
///
/// Ties go to the first declared dimension. An empty mapping yields the
/// empty label.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxEvaluator;

impl Evaluator for MaxEvaluator {
    fn evaluate(&self, dimensions: &Dimensions) -> String {
        let mut best: Option<&str> = None;
        let mut best_value = f64::NEG_INFINITY;
        for (name, value) in dimensions.iter() {
            if value > best_value {
                best = Some(name);
                best_value = value;
            }
        }
        best.unwrap_or_default().to_owned()
    }
}

/// `above` when `dimension` exceeds `threshold`, else `otherwise`.
///
/// A missing dimension counts as not exceeding.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdEvaluator {
    pub dimension: String,
    pub threshold: f64,
    pub above: String,
    pub otherwise: String,
}

impl Evaluator for ThresholdEvaluator {
    fn evaluate(&self, dimensions: &Dimensions) -> String {
        match dimensions.get(&self.dimension) {
            Some(value) if value > self.threshold => self.above.clone(),
            _ => self.otherwise.clone(),
        }
    }
}

#[cfg(test)]
#[path = "evaluator_test.rs"]
mod tests;
