//! Score summaries and per-question review derived from a finished attempt.
//!
//! Everything here is a pure function of the question set and the answer map.

use crate::model::{AnswerMap, Question, QuestionSet};

//
// ─── SUMMARY ──────────────────────────────────────────────────────────────────
//

/// Aggregate counts for an attempt.
///
/// `incorrect` includes unanswered questions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub unanswered: usize,
    /// Percentage of correct answers, rounded to one decimal place.
    pub score_percent: f64,
}

impl Summary {
    #[must_use]
    pub fn band(&self) -> ScoreBand {
        classify(self.score_percent)
    }
}

#[must_use]
pub fn summarize(questions: &QuestionSet, answers: &AnswerMap) -> Summary {
    let total = questions.len();
    let correct = questions
        .iter()
        .enumerate()
        .filter(|(index, question)| {
            answers
                .get(*index)
                .is_some_and(|choice| question.is_correct(choice))
        })
        .count();
    let answered = answers.len();

    Summary {
        total,
        answered,
        correct,
        incorrect: total - correct,
        unanswered: total.saturating_sub(answered),
        score_percent: score_percent(correct, total),
    }
}

#[allow(clippy::cast_precision_loss)]
fn score_percent(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = correct as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

//
// ─── BAND ─────────────────────────────────────────────────────────────────────
//

/// Qualitative score band used for display emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// 80 and above.
    High,
    /// At least 60, below 80.
    Medium,
    /// Below 60.
    Low,
}

impl ScoreBand {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreBand::High => "high",
            ScoreBand::Medium => "medium",
            ScoreBand::Low => "low",
        }
    }
}

#[must_use]
pub fn classify(score: f64) -> ScoreBand {
    if score >= 80.0 {
        ScoreBand::High
    } else if score >= 60.0 {
        ScoreBand::Medium
    } else {
        ScoreBand::Low
    }
}

//
// ─── REVIEW ───────────────────────────────────────────────────────────────────
//

/// How a choice is highlighted in the review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMark {
    /// The correct choice, whether or not the user picked it.
    Correct,
    /// The user picked this choice and it is wrong.
    UserWrong,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceReview {
    pub index: usize,
    pub label: char,
    pub is_correct: bool,
    pub is_selected: bool,
    pub mark: ChoiceMark,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionReview<'a> {
    pub index: usize,
    pub question: &'a Question,
    pub selected: Option<usize>,
    pub answered: bool,
    pub correct: bool,
    pub choices: Vec<ChoiceReview>,
}

/// Build the per-question review for a set of answers.
#[must_use]
pub fn review<'a>(questions: &'a QuestionSet, answers: &AnswerMap) -> Vec<QuestionReview<'a>> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| review_question(index, question, answers.get(index)))
        .collect()
}

fn review_question(index: usize, question: &Question, selected: Option<usize>) -> QuestionReview<'_> {
    let choices = (0..question.choices().len())
        .map(|choice| {
            let is_correct = question.is_correct(choice);
            let is_selected = selected == Some(choice);
            let mark = if is_correct {
                ChoiceMark::Correct
            } else if is_selected {
                ChoiceMark::UserWrong
            } else {
                ChoiceMark::Neutral
            };
            ChoiceReview {
                index: choice,
                label: choice_label(choice),
                is_correct,
                is_selected,
                mark,
            }
        })
        .collect();

    QuestionReview {
        index,
        question,
        selected,
        answered: selected.is_some(),
        correct: selected.is_some_and(|choice| question.is_correct(choice)),
        choices,
    }
}

/// Letter label for a choice position: `A`, `B`, `C`, ...
///
/// Past 26 choices the labels continue through the following code points.
#[must_use]
pub fn choice_label(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|offset| offset.checked_add(u32::from(b'A')))
        .and_then(char::from_u32)
        .unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn question(prompt: &str, choices: &[&str], answer: usize) -> Question {
        Question::new(
            prompt,
            choices.iter().map(|c| (*c).to_string()).collect(),
            answer,
        )
    }

    fn arithmetic_set() -> QuestionSet {
        QuestionSet::new(vec![
            question("1+1?", &["1", "2", "3"], 1),
            question("2+2?", &["3", "4"], 1),
        ])
    }

    #[test]
    fn scores_the_arithmetic_example() {
        let answers: AnswerMap = [(0, 1), (1, 0)].into_iter().collect();
        let summary = summarize(&arithmetic_set(), &answers);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.answered, 2);
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.incorrect, 1);
        assert!((summary.score_percent - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unanswered_counts_as_incorrect() {
        let set = QuestionSet::new(vec![
            question("a", &["x", "y"], 0),
            question("b", &["x", "y"], 1),
            question("c", &["x", "y"], 0),
        ]);
        let answers: AnswerMap = [(0, 0)].into_iter().collect();
        let summary = summarize(&set, &answers);
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.answered, 1);
        assert_eq!(summary.incorrect, 2);
        assert_eq!(summary.unanswered, 2);
        assert_eq!(summary.total, 3);
    }

    #[test]
    fn empty_set_scores_zero() {
        let summary = summarize(&QuestionSet::default(), &AnswerMap::new());
        assert_eq!(summary.total, 0);
        assert!(summary.score_percent.abs() < f64::EPSILON);
        assert_eq!(summary.band(), ScoreBand::Low);
    }

    #[test]
    fn score_rounds_to_one_decimal() {
        let set = QuestionSet::new(vec![
            question("a", &["x"], 0),
            question("b", &["x"], 0),
            question("c", &["x"], 0),
        ]);
        let answers: AnswerMap = [(0, 0)].into_iter().collect();
        let summary = summarize(&set, &answers);
        assert!((summary.score_percent - 33.3).abs() < 1e-9);

        let answers: AnswerMap = [(0, 0), (1, 0)].into_iter().collect();
        let summary = summarize(&set, &answers);
        assert!((summary.score_percent - 66.7).abs() < 1e-9);
    }

    #[test]
    fn classify_band_boundaries() {
        assert_eq!(classify(79.99), ScoreBand::Medium);
        assert_eq!(classify(80.0), ScoreBand::High);
        assert_eq!(classify(59.99), ScoreBand::Low);
        assert_eq!(classify(60.0), ScoreBand::Medium);
        assert_eq!(classify(100.0).as_str(), "high");
        assert_eq!(classify(0.0).as_str(), "low");
    }

    #[test]
    fn classify_is_idempotent() {
        for score in [0.0, 42.5, 60.0, 79.99, 80.0, 100.0] {
            assert_eq!(classify(score), classify(score));
        }
    }

    #[test]
    fn review_marks_correct_wrong_and_neutral_choices() {
        let set = arithmetic_set();
        let answers: AnswerMap = [(0, 1), (1, 0)].into_iter().collect();
        let rows = review(&set, &answers);

        assert!(rows[0].correct);
        let marks: Vec<_> = rows[0].choices.iter().map(|c| c.mark).collect();
        assert_eq!(
            marks,
            vec![ChoiceMark::Neutral, ChoiceMark::Correct, ChoiceMark::Neutral]
        );

        assert!(rows[1].answered);
        assert!(!rows[1].correct);
        let marks: Vec<_> = rows[1].choices.iter().map(|c| c.mark).collect();
        assert_eq!(marks, vec![ChoiceMark::UserWrong, ChoiceMark::Correct]);
        assert!(rows[1].choices[0].is_selected);
    }

    #[test]
    fn review_of_unanswered_question_has_no_selection() {
        let set = arithmetic_set();
        let rows = review(&set, &AnswerMap::new());
        assert!(!rows[0].answered);
        assert!(!rows[0].correct);
        assert_eq!(rows[0].selected, None);
        assert!(rows[0].choices.iter().all(|c| !c.is_selected));
    }

    #[test]
    fn choice_labels_follow_the_alphabet() {
        assert_eq!(choice_label(0), 'A');
        assert_eq!(choice_label(2), 'C');
        assert_eq!(choice_label(25), 'Z');
        assert_eq!(choice_label(26), '[');
    }
}
