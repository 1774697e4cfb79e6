use dioxus::prelude::*;
use dioxus::core::spawn_forever;
use services::{ExamService, UploadOutcome, read_question_file};

use crate::context::AppContext;

#[component]
pub fn UploadView(exam: Signal<ExamService>) -> Element {
    rsx! {
        div { class: "page upload-page",
            h2 { "Load a question set" }
            p { class: "upload-hint",
                "Enter the path of a JSON file containing an array of questions, each with "
                code { "question" }
                ", "
                code { "choices" }
                ", "
                code { "answer" }
                " and an optional "
                code { "reason" }
                "."
            }
            UploadForm { exam, compact: false }
        }
    }
}

/// Path field plus load button. Loading from here always supersedes the
/// current session, whatever its phase.
#[component]
pub fn UploadForm(exam: Signal<ExamService>, compact: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let mut path = use_signal(move || ctx.default_path().unwrap_or_default());
    let (upload_error, uploading) = {
        let service = exam.read();
        (service.upload_error(), service.is_uploading())
    };

    let mut exam = exam;
    let on_load = use_callback(move |()| {
        let source = path.read().trim().to_string();
        if source.is_empty() {
            return;
        }
        let ticket = exam.write().begin_upload(source.clone());
        // The header form unmounts on reset, so the read must not be tied to it.
        spawn_forever(async move {
            let result = read_question_file(&source).await;
            let Ok(mut service) = exam.try_write() else {
                tracing::debug!(source = %source, "exam closed before upload finished");
                return;
            };
            if service.complete_upload(&ticket, result) == UploadOutcome::Discarded {
                tracing::debug!(source = %source, "ignored result of superseded upload");
            }
        });
    });

    let class = if compact {
        "upload-form upload-form--compact"
    } else {
        "upload-form"
    };

    rsx! {
        form {
            class: "{class}",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_load.call(());
            },
            input {
                class: "upload-path",
                id: "upload-path",
                r#type: "text",
                placeholder: "questions.json",
                value: "{path}",
                oninput: move |evt| path.set(evt.value()),
            }
            button {
                class: "btn btn-primary",
                id: "upload-load",
                r#type: "submit",
                disabled: uploading,
                if uploading { "Loading..." } else { "Load" }
            }
            if let Some(message) = upload_error {
                p { class: "upload-error", role: "alert", "{message}" }
            }
        }
    }
}
