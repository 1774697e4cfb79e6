use dioxus::document::eval;
use dioxus::prelude::*;
use services::{ExamIntent, ExamService};

use crate::views::state::{ViewError, dispatch};
use crate::vm::{choice_for_key, map_question};

#[component]
pub fn InProgressView(exam: Signal<ExamService>) -> Element {
    let mut error = use_signal(|| None::<ViewError>);

    use_effect(|| {
        let _ = eval("document.getElementById('exam-root')?.focus();");
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let Some((choice_count, is_last)) = exam
            .read()
            .session()
            .attempt()
            .map(|attempt| (attempt.current().choices().len(), attempt.is_last()))
        else {
            return;
        };
        let intent = match evt.data.key() {
            Key::ArrowLeft => Some(ExamIntent::Previous),
            Key::ArrowRight => Some(ExamIntent::Next),
            Key::Enter if is_last => Some(ExamIntent::Finish),
            Key::Character(value) => choice_for_key(&value, choice_count).map(ExamIntent::Select),
            _ => None,
        };
        if let Some(intent) = intent {
            evt.prevent_default();
            error.set(dispatch(exam, intent).err());
        }
    });

    let vm = {
        let service = exam.read();
        let Some(attempt) = service.session().attempt() else {
            return rsx! {};
        };
        map_question(attempt)
    };

    rsx! {
        div {
            class: "page exam-page",
            id: "exam-root",
            tabindex: "0",
            onkeydown: on_key,
            header { class: "exam-header",
                span { class: "exam-progress", "{vm.progress_label}" }
                span { class: "exam-answered", "{vm.answered_label}" }
            }
            nav { class: "palette", aria_label: "Questions",
                for item in vm.palette.iter() {
                    button {
                        key: "{item.index}",
                        class: item.class(),
                        r#type: "button",
                        onclick: {
                            let index = item.index;
                            move |_| error.set(dispatch(exam, ExamIntent::GoTo(index)).err())
                        },
                        "{item.number}"
                    }
                }
            }
            section { class: "question",
                div { class: "question-text", dangerous_inner_html: "{vm.prompt_html}" }
                ul { class: "choices",
                    for choice in vm.choices.iter() {
                        li { key: "{choice.index}",
                            button {
                                class: choice.class(),
                                r#type: "button",
                                onclick: {
                                    let index = choice.index;
                                    move |_| error.set(dispatch(exam, ExamIntent::Select(index)).err())
                                },
                                span { class: "choice-label", "{choice.label}" }
                                span { class: "choice-text", "{choice.text}" }
                            }
                        }
                    }
                }
            }
            if let Some(err) = *error.read() {
                p { class: "view-error", role: "alert", "{err.message()}" }
            }
            footer { class: "exam-nav",
                button {
                    class: "btn btn-secondary",
                    id: "exam-previous",
                    r#type: "button",
                    disabled: !vm.can_previous,
                    onclick: move |_| error.set(dispatch(exam, ExamIntent::Previous).err()),
                    "Previous"
                }
                if vm.is_last {
                    button {
                        class: "btn btn-primary",
                        id: "exam-finish",
                        r#type: "button",
                        onclick: move |_| error.set(dispatch(exam, ExamIntent::Finish).err()),
                        "Finish exam"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        id: "exam-next",
                        r#type: "button",
                        onclick: move |_| error.set(dispatch(exam, ExamIntent::Next).err()),
                        "Next"
                    }
                }
            }
        }
    }
}
