//! Result widget — a labelled block revealed when the quiz finishes.

use super::WidgetId;

#[derive(Clone, Debug)]
pub struct ResultBlock {
    id: WidgetId,
    pub label: String,
    /// Body shown when this result is revealed.
    pub text: String,
    pub(crate) hidden: bool,
}

impl ResultBlock {
    #[must_use]
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: WidgetId::new(), label: label.into(), text: text.into(), hidden: true }
    }

    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub fn matches(&self, label: &str) -> bool {
        labels_match(&self.label, label)
    }
}

/// Result labels compare case-insensitively everywhere.
#[must_use]
pub fn labels_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_result_starts_hidden() {
        assert!(ResultBlock::new("cool", "You are cool.").is_hidden());
    }

    #[test]
    fn matching_ignores_case() {
        let result = ResultBlock::new("Cool", "");
        assert!(result.matches("cool"));
        assert!(result.matches("COOL"));
        assert!(!result.matches("uncool"));
    }

    #[test]
    fn labels_match_handles_non_ascii() {
        assert!(labels_match("ÉTÉ", "été"));
    }
}
