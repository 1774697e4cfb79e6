use std::sync::Arc;

use serde::Serialize;
use serde_json::Number;

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question as it appeared in the uploaded file.
///
/// The stored `answer` is kept verbatim from the source document; use
/// [`Question::answer`] to get it as a choice index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    #[serde(rename = "question")]
    prompt: String,
    choices: Vec<String>,
    answer: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl Question {
    /// Build a question with an in-range integer answer.
    #[must_use]
    pub fn new(prompt: impl Into<String>, choices: Vec<String>, answer: usize) -> Self {
        Self {
            prompt: prompt.into(),
            choices,
            answer: Number::from(answer),
            reason: None,
        }
    }

    pub(crate) fn from_parts(
        prompt: String,
        choices: Vec<String>,
        answer: Number,
        reason: Option<String>,
    ) -> Self {
        Self {
            prompt,
            choices,
            answer,
            reason,
        }
    }

    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn choice(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(String::as_str)
    }

    /// The correct choice index, if the stored answer is a non-negative integer.
    ///
    /// Negative or fractional answers never match any selection.
    #[must_use]
    pub fn answer(&self) -> Option<usize> {
        self.answer
            .as_u64()
            .and_then(|value| usize::try_from(value).ok())
    }

    /// The answer exactly as it was written in the source file.
    #[must_use]
    pub fn raw_answer(&self) -> &Number {
        &self.answer
    }

    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Returns true if `choice` is the correct choice for this question.
    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        self.answer() == Some(choice)
    }
}

//
// ─── QUESTION SET ─────────────────────────────────────────────────────────────
//

/// Ordered, immutable list of questions. Cloning is cheap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuestionSet {
    questions: Arc<[Question]>,
}

impl QuestionSet {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: questions.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Returns true if both handles point at the same loaded set.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.questions, &other.questions)
    }
}

impl From<Vec<Question>> for QuestionSet {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
