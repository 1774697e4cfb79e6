use exam_core::{Attempt, choice_label};

use crate::vm::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub index: usize,
    pub label: char,
    pub text: String,
    pub selected: bool,
}

impl ChoiceVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.selected {
            "choice choice--selected"
        } else {
            "choice"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteItemVm {
    pub index: usize,
    pub number: usize,
    pub answered: bool,
    pub current: bool,
}

impl PaletteItemVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match (self.current, self.answered) {
            (true, _) => "palette-item palette-item--current",
            (false, true) => "palette-item palette-item--answered",
            (false, false) => "palette-item",
        }
    }
}

/// Everything the in-progress view needs for the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub total: usize,
    pub progress_label: String,
    pub answered_label: String,
    pub prompt_html: String,
    pub choices: Vec<ChoiceVm>,
    pub can_previous: bool,
    pub can_next: bool,
    pub is_last: bool,
    pub palette: Vec<PaletteItemVm>,
}

#[must_use]
pub fn map_question(attempt: &Attempt) -> QuestionVm {
    let index = attempt.position();
    let total = attempt.questions().len();
    let question = attempt.current();
    let selected = attempt.current_answer();
    let answers = attempt.answers();

    let choices = question
        .choices()
        .iter()
        .enumerate()
        .map(|(choice, text)| ChoiceVm {
            index: choice,
            label: choice_label(choice),
            text: text.clone(),
            selected: selected == Some(choice),
        })
        .collect();

    let palette = (0..total)
        .map(|i| PaletteItemVm {
            index: i,
            number: i + 1,
            answered: answers.is_answered(i),
            current: i == index,
        })
        .collect();

    QuestionVm {
        index,
        total,
        progress_label: format!("Question {} of {total}", index + 1),
        answered_label: format!("{} of {total} answered", answers.len()),
        prompt_html: markdown_to_html(question.prompt()),
        choices,
        can_previous: !attempt.is_first(),
        can_next: !attempt.is_last(),
        is_last: attempt.is_last(),
        palette,
    }
}

/// Map a typed key to a choice index: `1`-`9` or a choice letter.
#[must_use]
pub fn choice_for_key(key: &str, choice_count: usize) -> Option<usize> {
    let mut chars = key.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    let index = if let Some(digit) = ch.to_digit(10) {
        usize::try_from(digit).ok()?.checked_sub(1)?
    } else if ch.is_ascii_alphabetic() {
        usize::from(ch.to_ascii_uppercase() as u8 - b'A')
    } else {
        return None;
    };

    (index < choice_count).then_some(index)
}
