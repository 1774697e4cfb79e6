#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod scoring;
pub mod session;
pub mod time;
pub mod validate;

pub use error::{SessionError, ValidationError};
pub use model::{AnswerMap, Question, QuestionSet};
pub use scoring::{
    ChoiceMark, ChoiceReview, QuestionReview, ScoreBand, Summary, choice_label, classify, review,
    summarize,
};
pub use session::{Attempt, ExamResults, ExamSession, PhaseKind, SessionAction};
pub use time::Clock;
pub use validate::{QuestionWarning, lint, validate};
