use std::collections::BTreeMap;

/// Sparse record of the choice selected for each question index.
///
/// A question with no entry is unanswered; answered-but-wrong and unanswered
/// stay distinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerMap {
    selected: BTreeMap<usize, usize>,
}

impl AnswerMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `choice` for `question`, returning the previously selected choice.
    pub fn select(&mut self, question: usize, choice: usize) -> Option<usize> {
        self.selected.insert(question, choice)
    }

    #[must_use]
    pub fn get(&self, question: usize) -> Option<usize> {
        self.selected.get(&question).copied()
    }

    #[must_use]
    pub fn is_answered(&self, question: usize) -> bool {
        self.selected.contains_key(&question)
    }

    /// Number of distinct questions with a recorded answer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Iterate `(question, choice)` pairs in question order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.selected.iter().map(|(question, choice)| (*question, *choice))
    }
}

impl FromIterator<(usize, usize)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}
