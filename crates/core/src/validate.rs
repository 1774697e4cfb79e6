//! Turns raw uploaded text into a [`QuestionSet`].
//!
//! Structural validation is fail-fast: the first malformed record rejects the
//! whole upload. Content problems that still allow the exam to run (an answer
//! index past the last choice, an empty choice list) are reported separately by
//! [`lint`] and never reject the set.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::model::{Question, QuestionSet};

/// Parse and validate an uploaded question file.
///
/// # Errors
///
/// Returns `ValidationError::Parse` if `raw` is not JSON.
/// Returns `ValidationError::NotAnArray` if the top-level value is not an array.
/// Returns `ValidationError::InvalidQuestion` for the first record missing a truthy
/// `question`, an array `choices`, or a numeric `answer`.
///
/// A leading UTF-8 byte-order mark is ignored.
pub fn validate(raw: &str) -> Result<QuestionSet, ValidationError> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let value: Value = serde_json::from_str(raw)?;
    let Value::Array(records) = value else {
        return Err(ValidationError::NotAnArray);
    };

    let questions = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            parse_record(record).ok_or(ValidationError::InvalidQuestion { index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QuestionSet::new(questions))
}

fn parse_record(record: Value) -> Option<Question> {
    let Value::Object(mut fields) = record else {
        return None;
    };

    let prompt = fields.remove("question").and_then(truthy_text)?;
    let Some(Value::Array(choices)) = fields.remove("choices") else {
        return None;
    };
    let Some(Value::Number(answer)) = fields.remove("answer") else {
        return None;
    };

    Some(Question::from_parts(
        prompt,
        choices.into_iter().map(choice_text).collect(),
        answer,
        reason_text(&mut fields),
    ))
}

/// Text of a `question` field, or `None` if the value is falsy.
fn truthy_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64().is_some_and(|v| v != 0.0) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
        _ => None,
    }
}

fn choice_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

fn reason_text(fields: &mut Map<String, Value>) -> Option<String> {
    match fields.remove("reason") {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}

//
// ─── LINT ─────────────────────────────────────────────────────────────────────
//

/// Content issue in an otherwise valid question set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionWarning {
    /// The question has no choices, so it can never be answered.
    NoChoices { index: usize },
    /// The answer is negative or fractional and can never be matched.
    AnswerNotAnIndex { index: usize, answer: String },
    /// The answer points past the last choice and can never be matched.
    AnswerOutOfRange {
        index: usize,
        answer: usize,
        choices: usize,
    },
}

impl fmt::Display for QuestionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoChoices { index } => write!(f, "question {index} has no choices"),
            Self::AnswerNotAnIndex { index, answer } => {
                write!(f, "question {index} has answer {answer}, which is not a choice index")
            }
            Self::AnswerOutOfRange {
                index,
                answer,
                choices,
            } => write!(
                f,
                "question {index} has answer {answer} but only {choices} choices"
            ),
        }
    }
}

/// Report questions that can never be scored as correct.
#[must_use]
pub fn lint(questions: &QuestionSet) -> Vec<QuestionWarning> {
    let mut warnings = Vec::new();
    for (index, question) in questions.iter().enumerate() {
        let choices = question.choices().len();
        if choices == 0 {
            warnings.push(QuestionWarning::NoChoices { index });
        }
        match question.answer() {
            None => warnings.push(QuestionWarning::AnswerNotAnIndex {
                index,
                answer: question.raw_answer().to_string(),
            }),
            Some(answer) if choices > 0 && answer >= choices => {
                warnings.push(QuestionWarning::AnswerOutOfRange {
                    index,
                    answer,
                    choices,
                });
            }
            Some(_) => {}
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_records_verbatim() {
        let raw = r#"[
            {"question": "1+1?", "choices": ["1", "2", "3"], "answer": 1, "reason": "sum"},
            {"question": "2+2?", "choices": ["3", "4"], "answer": 1}
        ]"#;
        let set = validate(raw).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().prompt(), "1+1?");
        assert_eq!(set.get(0).unwrap().reason(), Some("sum"));
        assert_eq!(set.get(1).unwrap().reason(), None);
        assert_eq!(set.get(1).unwrap().answer(), Some(1));
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let set = validate("\u{feff}[{\"question\": \"q\", \"choices\": [\"a\"], \"answer\": 0}]")
            .unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0).unwrap().prompt(), "q");

        let err = validate("[]\u{feff}").unwrap_err();
        assert!(matches!(err, ValidationError::Parse(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = validate("[{\"question\": ").unwrap_err();
        assert!(matches!(err, ValidationError::Parse(_)));
    }

    #[test]
    fn rejects_non_array_top_level() {
        let err = validate(r#"{"question": "Q", "choices": [], "answer": 0}"#).unwrap_err();
        assert!(matches!(err, ValidationError::NotAnArray));
        assert_eq!(err.to_string(), "not an array");
    }

    #[test]
    fn fails_fast_citing_first_bad_index() {
        let raw = r#"[
            {"question": "ok", "choices": ["a"], "answer": 0},
            {"question": "ok", "choices": ["a"], "answer": 0},
            {"question": "bad", "choices": "a", "answer": 0},
            {"question": "", "choices": ["a"], "answer": 0}
        ]"#;
        let err = validate(raw).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidQuestion { index: 2 }));
        assert_eq!(err.to_string(), "invalid question structure at index 2");
    }

    #[test]
    fn rejects_missing_or_mistyped_fields() {
        let cases = [
            r#"[{"choices": ["a"], "answer": 0}]"#,
            r#"[{"question": "", "choices": ["a"], "answer": 0}]"#,
            r#"[{"question": 0, "choices": ["a"], "answer": 0}]"#,
            r#"[{"question": null, "choices": ["a"], "answer": 0}]"#,
            r#"[{"question": "Q", "answer": 0}]"#,
            r#"[{"question": "Q", "choices": ["a"]}]"#,
            r#"[{"question": "Q", "choices": ["a"], "answer": "0"}]"#,
            r#"["just a string"]"#,
        ];
        for raw in cases {
            let err = validate(raw).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidQuestion { index: 0 }),
                "expected index 0 failure for {raw}, got {err:?}"
            );
        }
    }

    #[test]
    fn empty_array_is_a_valid_empty_set() {
        let set = validate("[]").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn truthy_non_string_prompts_are_accepted() {
        let set = validate(r#"[{"question": 42, "choices": [1, true], "answer": 0}]"#).unwrap();
        let question = set.get(0).unwrap();
        assert_eq!(question.prompt(), "42");
        assert_eq!(question.choices().to_vec(), vec!["1", "true"]);
    }

    #[test]
    fn out_of_range_answer_passes_validation_but_is_linted() {
        let raw = r#"[
            {"question": "A", "choices": ["x", "y"], "answer": 5},
            {"question": "B", "choices": [], "answer": 0},
            {"question": "C", "choices": ["x"], "answer": -1},
            {"question": "D", "choices": ["x"], "answer": 0}
        ]"#;
        let set = validate(raw).unwrap();
        let warnings = lint(&set);
        assert_eq!(
            warnings,
            vec![
                QuestionWarning::AnswerOutOfRange {
                    index: 0,
                    answer: 5,
                    choices: 2
                },
                QuestionWarning::NoChoices { index: 1 },
                QuestionWarning::AnswerNotAnIndex {
                    index: 2,
                    answer: "-1".to_string()
                },
            ]
        );
    }
}
