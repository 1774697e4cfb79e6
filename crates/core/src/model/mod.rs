mod answers;
mod question;

pub use answers::AnswerMap;
pub use question::{Question, QuestionSet};
