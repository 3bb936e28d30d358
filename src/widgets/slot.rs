//! Slot — the ordered children a host hands to a quiz container.
//!
//! DESIGN
//! ======
//! The container does not keep its own lists of questions and results.
//! It queries the slot each time it needs them, so hosts can insert or
//! remove children between actions and the next refresh picks that up.
//! `Node` is the typed registry that tells the roles apart.

use super::WidgetId;
use super::question::Question;
use super::result::ResultBlock;

/// One child of a quiz container.
#[derive(Clone, Debug)]
pub enum Node {
    Question(Question),
    Result(ResultBlock),
    /// Free-standing content (headings, prose) the container ignores.
    Content(String),
}

impl Node {
    #[must_use]
    pub fn id(&self) -> Option<WidgetId> {
        match self {
            Self::Question(q) => Some(q.id()),
            Self::Result(r) => Some(r.id()),
            Self::Content(_) => None,
        }
    }
}

impl From<Question> for Node {
    fn from(question: Question) -> Self {
        Self::Question(question)
    }
}

impl From<ResultBlock> for Node {
    fn from(result: ResultBlock) -> Self {
        Self::Result(result)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Slot {
    nodes: Vec<Node>,
}

impl Slot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, node: impl Into<Node>) -> Self {
        self.nodes.push(node.into());
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    /// Remove the question or result with this id.
    pub fn remove(&mut self, id: WidgetId) -> Option<Node> {
        let index = self.nodes.iter().position(|n| n.id() == Some(id))?;
        Some(self.nodes.remove(index))
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Question(q) => Some(q),
            _ => None,
        })
    }

    pub fn questions_mut(&mut self) -> impl Iterator<Item = &mut Question> {
        self.nodes.iter_mut().filter_map(|n| match n {
            Node::Question(q) => Some(q),
            _ => None,
        })
    }

    pub fn results(&self) -> impl Iterator<Item = &ResultBlock> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Result(r) => Some(r),
            _ => None,
        })
    }

    pub fn results_mut(&mut self) -> impl Iterator<Item = &mut ResultBlock> {
        self.nodes.iter_mut().filter_map(|n| match n {
            Node::Result(r) => Some(r),
            _ => None,
        })
    }

    /// The question that owns `choice`.
    pub fn question_for_choice_mut(&mut self, choice: WidgetId) -> Option<&mut Question> {
        self.questions_mut().find(|q| q.contains_choice(choice))
    }
}

#[cfg(test)]
#[path = "slot_test.rs"]
mod tests;
