use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{InProgressView, PreExamView, ResultsView, UploadForm, UploadView};
use crate::vm::ViewKind;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Exam Runner" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                ExamRoot {}
            }
        }
    }
}

/// Owns the exam service and picks the view for the current phase.
#[component]
pub fn ExamRoot() -> Element {
    let ctx = use_context::<AppContext>();
    let exam = use_signal(move || ctx.take_service());
    let view = ViewKind::from(exam.read().phase());
    let body = match view {
        ViewKind::Upload => rsx! { UploadView { exam } },
        ViewKind::PreExam => rsx! { PreExamView { exam } },
        ViewKind::InProgress => rsx! { InProgressView { exam } },
        ViewKind::Results => rsx! { ResultsView { exam } },
    };

    rsx! {
        if view != ViewKind::Upload {
            header { class: "app-header",
                h1 { class: "app-title", "Exam Runner" }
                UploadForm { exam, compact: true }
            }
        }
        main { class: "app-main", {body} }
    }
}
