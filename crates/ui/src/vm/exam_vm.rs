use exam_core::{PhaseKind, QuestionSet};

/// Which screen to show. A pure projection of the session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Upload,
    PreExam,
    InProgress,
    Results,
}

impl From<PhaseKind> for ViewKind {
    fn from(phase: PhaseKind) -> Self {
        match phase {
            PhaseKind::Empty => ViewKind::Upload,
            PhaseKind::Ready => ViewKind::PreExam,
            PhaseKind::InProgress => ViewKind::InProgress,
            PhaseKind::Results => ViewKind::Results,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreExamVm {
    pub source: Option<String>,
    pub question_count: usize,
    pub count_label: String,
    pub can_start: bool,
}

#[must_use]
pub fn map_pre_exam(questions: &QuestionSet, source: Option<&str>) -> PreExamVm {
    let question_count = questions.len();
    let count_label = match question_count {
        0 => "This file has no questions.".to_string(),
        1 => "1 question".to_string(),
        n => format!("{n} questions"),
    };
    PreExamVm {
        source: source.map(str::to_string),
        question_count,
        count_label,
        can_start: question_count > 0,
    }
}
