use dioxus::prelude::*;
use services::{ExamIntent, ExamService};

use crate::views::state::{ViewError, dispatch};
use crate::vm::map_pre_exam;

#[component]
pub fn PreExamView(exam: Signal<ExamService>) -> Element {
    let mut error = use_signal(|| None::<ViewError>);
    let vm = {
        let service = exam.read();
        let Some(questions) = service.session().questions() else {
            return rsx! {};
        };
        map_pre_exam(questions, service.source())
    };

    rsx! {
        div { class: "page pre-exam-page",
            h2 { "Ready to start" }
            if let Some(source) = vm.source.as_deref() {
                p { class: "pre-exam-source", "Loaded from {source}" }
            }
            p { class: "pre-exam-count", "{vm.count_label}" }
            p { class: "pre-exam-hint",
                "Answer one question at a time. You can move back and forth and change answers until you finish."
            }
            if let Some(err) = *error.read() {
                p { class: "view-error", role: "alert", "{err.message()}" }
            }
            div { class: "pre-exam-actions",
                button {
                    class: "btn btn-primary",
                    id: "exam-start",
                    r#type: "button",
                    disabled: !vm.can_start,
                    onclick: move |_| error.set(dispatch(exam, ExamIntent::Start).err()),
                    "Start exam"
                }
                button {
                    class: "btn btn-secondary",
                    id: "exam-reset",
                    r#type: "button",
                    onclick: move |_| error.set(dispatch(exam, ExamIntent::Reset).err()),
                    "Choose another file"
                }
            }
        }
    }
}
