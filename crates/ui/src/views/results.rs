use dioxus::prelude::*;
use services::{ExamIntent, ExamService};

use crate::views::state::{ViewError, dispatch};
use crate::vm::map_results;

#[component]
pub fn ResultsView(exam: Signal<ExamService>) -> Element {
    let mut error = use_signal(|| None::<ViewError>);
    let vm = {
        let service = exam.read();
        let Some(results) = service.session().results() else {
            return rsx! {};
        };
        map_results(results)
    };

    rsx! {
        div { class: "page results-page",
            section { class: "{vm.band_class}", id: "results-score",
                h2 { "Your score" }
                p { class: "score-value", "{vm.score_label}" }
                dl { class: "score-counts",
                    dt { "Correct" }
                    dd { "{vm.correct} of {vm.total}" }
                    dt { "Incorrect" }
                    dd { "{vm.incorrect}" }
                    dt { "Not answered" }
                    dd { "{vm.unanswered}" }
                    dt { "Time" }
                    dd { "{vm.elapsed_label}" }
                }
            }
            if let Some(err) = *error.read() {
                p { class: "view-error", role: "alert", "{err.message()}" }
            }
            div { class: "results-actions",
                button {
                    class: "btn btn-primary",
                    id: "exam-restart",
                    r#type: "button",
                    onclick: move |_| error.set(dispatch(exam, ExamIntent::Restart).err()),
                    "Retake exam"
                }
                button {
                    class: "btn btn-secondary",
                    id: "exam-reset",
                    r#type: "button",
                    onclick: move |_| error.set(dispatch(exam, ExamIntent::Reset).err()),
                    "Load another file"
                }
            }
            section { class: "review",
                h3 { "Review" }
                for row in vm.rows.iter() {
                    article { key: "{row.number}", class: "review-row",
                        header { class: "review-row-header",
                            span { class: "review-number", "Question {row.number}" }
                            span { class: row.status.class(), "{row.status.label()}" }
                        }
                        div { class: "question-text", dangerous_inner_html: "{row.prompt_html}" }
                        ul { class: "review-choices",
                            for (i, choice) in row.choices.iter().enumerate() {
                                li { key: "{i}", class: choice.class,
                                    span { class: "choice-label", "{choice.label}" }
                                    span { class: "choice-text", "{choice.text}" }
                                    if let Some(note) = choice.note {
                                        span { class: "review-note", "{note}" }
                                    }
                                }
                            }
                        }
                        if let Some(reason) = row.reason_html.as_deref() {
                            div { class: "review-reason",
                                strong { "Explanation" }
                                div { dangerous_inner_html: "{reason}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
