use exam_core::{ChoiceMark, ExamResults, QuestionReview, ScoreBand};

use crate::vm::markdown_vm::markdown_to_html;
use crate::vm::time_fmt::format_elapsed;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewStatus {
    Correct,
    Incorrect,
    Unanswered,
}

impl ReviewStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ReviewStatus::Correct => "Correct",
            ReviewStatus::Incorrect => "Incorrect",
            ReviewStatus::Unanswered => "Not answered",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            ReviewStatus::Correct => "review-status review-status--correct",
            ReviewStatus::Incorrect => "review-status review-status--incorrect",
            ReviewStatus::Unanswered => "review-status review-status--unanswered",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewChoiceVm {
    pub label: char,
    pub text: String,
    pub class: &'static str,
    pub note: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRowVm {
    pub number: usize,
    pub prompt_html: String,
    pub status: ReviewStatus,
    pub choices: Vec<ReviewChoiceVm>,
    pub reason_html: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub unanswered: usize,
    pub score_label: String,
    pub band: ScoreBand,
    pub band_class: String,
    pub elapsed_label: String,
    pub rows: Vec<ReviewRowVm>,
}

#[must_use]
pub fn map_results(results: &ExamResults) -> ResultsVm {
    let summary = results.summary();
    let band = summary.band();
    ResultsVm {
        total: summary.total,
        answered: summary.answered,
        correct: summary.correct,
        incorrect: summary.incorrect,
        unanswered: summary.unanswered,
        score_label: format!("{:.1}%", summary.score_percent),
        band,
        band_class: format!("score score--{}", band.as_str()),
        elapsed_label: format_elapsed(results.elapsed()),
        rows: results.review().iter().map(map_review_row).collect(),
    }
}

fn map_review_row(row: &QuestionReview<'_>) -> ReviewRowVm {
    let status = if row.correct {
        ReviewStatus::Correct
    } else if row.answered {
        ReviewStatus::Incorrect
    } else {
        ReviewStatus::Unanswered
    };

    let choices = row
        .choices
        .iter()
        .map(|choice| {
            let (class, note) = match (choice.mark, choice.is_selected) {
                (ChoiceMark::Correct, true) => {
                    ("review-choice review-choice--correct", Some("Your answer"))
                }
                (ChoiceMark::Correct, false) => {
                    ("review-choice review-choice--correct", Some("Correct answer"))
                }
                (ChoiceMark::UserWrong, _) => {
                    ("review-choice review-choice--wrong", Some("Your answer"))
                }
                (ChoiceMark::Neutral, _) => ("review-choice", None),
            };
            ReviewChoiceVm {
                label: choice.label,
                text: row
                    .question
                    .choice(choice.index)
                    .unwrap_or_default()
                    .to_string(),
                class,
                note,
            }
        })
        .collect();

    ReviewRowVm {
        number: row.index + 1,
        prompt_html: markdown_to_html(row.question.prompt()),
        status,
        choices,
        reason_html: row.question.reason().map(markdown_to_html),
    }
}
