use std::sync::{Arc, Mutex};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use exam_core::time::fixed_clock;
use services::{Clock, ExamIntent, ExamService, parse_upload};

use crate::app::ExamRoot;
use crate::context::{UiApp, build_app_context};

pub const SAMPLE_SET: &str = r#"[
    {"question": "What is **2 + 2**?", "choices": ["3", "4", "5"], "answer": 1, "reason": "Basic *addition*."},
    {"question": "Capital of France?", "choices": ["Paris", "Rome"], "answer": 0}
]"#;

struct TestApp {
    prepared: Mutex<Option<ExamService>>,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn default_path(&self) -> Option<String> {
        Some("sample.json".into())
    }

    fn take_prepared(&self) -> Option<ExamService> {
        self.prepared.lock().ok().and_then(|mut slot| slot.take())
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ExamHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { ExamRoot {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// A service with `SAMPLE_SET` loaded and `intents` applied in order.
pub fn service_after(intents: &[ExamIntent]) -> ExamService {
    let mut service = ExamService::new(fixed_clock());
    let ticket = service.begin_upload("sample.json");
    service.complete_upload(&ticket, parse_upload(SAMPLE_SET));
    for intent in intents {
        service.dispatch(*intent).expect("intent applies");
    }
    service
}

pub fn setup_view_harness(service: ExamService) -> ViewHarness {
    let app = Arc::new(TestApp {
        prepared: Mutex::new(Some(service)),
    });
    ViewHarness {
        dom: VirtualDom::new_with_props(ExamHarness, HarnessProps { app }),
    }
}
