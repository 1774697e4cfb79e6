use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::error::SessionError;
use crate::model::{AnswerMap, Question, QuestionSet};
use crate::scoring::{QuestionReview, Summary, review, summarize};
use crate::time::Clock;

//
// ─── PHASE ────────────────────────────────────────────────────────────────────
//

/// Stage of the exam session, without the data each stage carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    /// No question set loaded.
    Empty,
    /// A set is loaded and the exam has not started.
    Ready,
    /// The user is answering questions.
    InProgress,
    /// The exam is finished and the review is shown.
    Results,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PhaseKind::Empty => "empty",
            PhaseKind::Ready => "ready",
            PhaseKind::InProgress => "in progress",
            PhaseKind::Results => "showing results",
        };
        f.write_str(label)
    }
}

/// Session operations, used to report rejected transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Start,
    SelectAnswer,
    Next,
    Previous,
    GoTo,
    Finish,
    Restart,
}

impl fmt::Display for SessionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionAction::Start => "start",
            SessionAction::SelectAnswer => "select an answer",
            SessionAction::Next => "move to the next question",
            SessionAction::Previous => "move to the previous question",
            SessionAction::GoTo => "jump to a question",
            SessionAction::Finish => "finish",
            SessionAction::Restart => "restart",
        };
        f.write_str(label)
    }
}

enum Phase {
    Empty,
    Ready(QuestionSet),
    InProgress(Attempt),
    Results(ExamResults),
}

impl Phase {
    fn kind(&self) -> PhaseKind {
        match self {
            Phase::Empty => PhaseKind::Empty,
            Phase::Ready(_) => PhaseKind::Ready,
            Phase::InProgress(_) => PhaseKind::InProgress,
            Phase::Results(_) => PhaseKind::Results,
        }
    }
}

//
// ─── ATTEMPT ──────────────────────────────────────────────────────────────────
//

/// An exam being answered.
///
/// Only exists while the session is in progress, so navigation and answer
/// selection through this handle cannot hit a wrong phase. The set is never
/// empty and `position` always indexes into it.
#[derive(Debug, Clone)]
pub struct Attempt {
    questions: QuestionSet,
    position: usize,
    answers: AnswerMap,
    started_at: DateTime<Utc>,
}

impl Attempt {
    fn new(questions: QuestionSet, started_at: DateTime<Utc>) -> Self {
        Self {
            questions,
            position: 0,
            answers: AnswerMap::new(),
            started_at,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn current(&self) -> &Question {
        // `start` refuses an empty set and every move is clamped to `len - 1`.
        debug_assert!(self.position < self.questions.len());
        &self.questions.as_slice()[self.position]
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// Choice selected for the current question, if any.
    #[must_use]
    pub fn current_answer(&self) -> Option<usize> {
        self.answers.get(self.position)
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.position + 1 >= self.questions.len()
    }

    /// Record `choice` for the current question, overwriting any earlier answer.
    ///
    /// Returns the previously selected choice.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::ChoiceOutOfRange` if the question has no such choice.
    pub fn select(&mut self, choice: usize) -> Result<Option<usize>, SessionError> {
        let len = self.current().choices().len();
        if choice >= len {
            return Err(SessionError::ChoiceOutOfRange { choice, len });
        }
        Ok(self.answers.select(self.position, choice))
    }

    /// Move to the next question. Returns false at the last question.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Move to the previous question. Returns false at the first question.
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Jump directly to question `index`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::QuestionOutOfRange` if `index` is past the last question.
    pub fn go_to(&mut self, index: usize) -> Result<(), SessionError> {
        let len = self.questions.len();
        if index >= len {
            return Err(SessionError::QuestionOutOfRange { index, len });
        }
        self.position = index;
        Ok(())
    }
}

//
// ─── RESULTS ──────────────────────────────────────────────────────────────────
//

/// A finished attempt, ready for scoring and review.
#[derive(Debug, Clone)]
pub struct ExamResults {
    attempt: Attempt,
    finished_at: DateTime<Utc>,
}

impl ExamResults {
    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.attempt.questions
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerMap {
        &self.attempt.answers
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        summarize(self.questions(), self.answers())
    }

    #[must_use]
    pub fn review(&self) -> Vec<QuestionReview<'_>> {
        review(self.questions(), self.answers())
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.attempt.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.finished_at - self.attempt.started_at
    }
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// Exam session state machine.
///
/// ```text
/// Empty -load-> Ready -start-> InProgress -finish-> Results -restart-> Ready
/// any -load-> Ready            any -reset-> Empty
/// ```
pub struct ExamSession {
    clock: Clock,
    phase: Phase,
}

impl Default for ExamSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ExamSession {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Clock::default())
    }

    #[must_use]
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            clock,
            phase: Phase::Empty,
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Mutable access to the clock, for tests that advance time.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    #[must_use]
    pub fn phase(&self) -> PhaseKind {
        self.phase.kind()
    }

    /// The loaded question set, in any phase but `Empty`.
    #[must_use]
    pub fn questions(&self) -> Option<&QuestionSet> {
        match &self.phase {
            Phase::Empty => None,
            Phase::Ready(questions) => Some(questions),
            Phase::InProgress(attempt) => Some(&attempt.questions),
            Phase::Results(results) => Some(results.questions()),
        }
    }

    /// The running attempt, only while in progress.
    #[must_use]
    pub fn attempt(&self) -> Option<&Attempt> {
        match &self.phase {
            Phase::InProgress(attempt) => Some(attempt),
            _ => None,
        }
    }

    pub fn attempt_mut(&mut self) -> Option<&mut Attempt> {
        match &mut self.phase {
            Phase::InProgress(attempt) => Some(attempt),
            _ => None,
        }
    }

    /// The finished attempt, only while showing results.
    #[must_use]
    pub fn results(&self) -> Option<&ExamResults> {
        match &self.phase {
            Phase::Results(results) => Some(results),
            _ => None,
        }
    }

    /// Install a new question set, discarding whatever the session held.
    pub fn load(&mut self, questions: QuestionSet) {
        self.phase = Phase::Ready(questions);
    }

    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless the session is `Ready`.
    /// Returns `SessionError::NoQuestions` if the loaded set is empty.
    pub fn start(&mut self) -> Result<(), SessionError> {
        let started_at = self.clock.now();
        match std::mem::replace(&mut self.phase, Phase::Empty) {
            Phase::Ready(questions) if questions.is_empty() => {
                self.phase = Phase::Ready(questions);
                Err(SessionError::NoQuestions)
            }
            Phase::Ready(questions) => {
                self.phase = Phase::InProgress(Attempt::new(questions, started_at));
                Ok(())
            }
            other => {
                self.phase = other;
                Err(self.invalid(SessionAction::Start))
            }
        }
    }

    /// Record `choice` for the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless the session is in progress.
    /// Returns `SessionError::ChoiceOutOfRange` if the question has no such choice.
    pub fn select_answer(&mut self, choice: usize) -> Result<(), SessionError> {
        self.require_attempt(SessionAction::SelectAnswer)?
            .select(choice)
            .map(|_| ())
    }

    /// Returns whether the position moved.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless the session is in progress.
    pub fn next(&mut self) -> Result<bool, SessionError> {
        Ok(self.require_attempt(SessionAction::Next)?.next())
    }

    /// Returns whether the position moved.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless the session is in progress.
    pub fn previous(&mut self) -> Result<bool, SessionError> {
        Ok(self.require_attempt(SessionAction::Previous)?.previous())
    }

    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless the session is in progress.
    /// Returns `SessionError::QuestionOutOfRange` if `index` is past the last question.
    pub fn go_to(&mut self, index: usize) -> Result<(), SessionError> {
        self.require_attempt(SessionAction::GoTo)?.go_to(index)
    }

    /// End the attempt. Unanswered questions are allowed and score as incorrect.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless the session is in progress.
    pub fn finish(&mut self) -> Result<(), SessionError> {
        let finished_at = self.clock.now();
        match std::mem::replace(&mut self.phase, Phase::Empty) {
            Phase::InProgress(attempt) => {
                self.phase = Phase::Results(ExamResults {
                    attempt,
                    finished_at,
                });
                Ok(())
            }
            other => {
                self.phase = other;
                Err(self.invalid(SessionAction::Finish))
            }
        }
    }

    /// Return to `Ready` with the same question set and no answers.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` if no set is loaded.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        let questions = self
            .questions()
            .cloned()
            .ok_or(SessionError::InvalidTransition {
                from: PhaseKind::Empty,
                action: SessionAction::Restart,
            })?;
        self.phase = Phase::Ready(questions);
        Ok(())
    }

    /// Drop everything and wait for a new upload.
    pub fn reset(&mut self) {
        self.phase = Phase::Empty;
    }

    fn require_attempt(&mut self, action: SessionAction) -> Result<&mut Attempt, SessionError> {
        let from = self.phase();
        self.attempt_mut()
            .ok_or(SessionError::InvalidTransition { from, action })
    }

    fn invalid(&self, action: SessionAction) -> SessionError {
        SessionError::InvalidTransition {
            from: self.phase(),
            action,
        }
    }
}

impl fmt::Debug for ExamSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExamSession")
            .field("phase", &self.phase())
            .field("questions_len", &self.questions().map(QuestionSet::len))
            .field("position", &self.attempt().map(Attempt::position))
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
