use exam_core::time::fixed_clock;
use services::{ExamIntent, ExamService, INVALID_UPLOAD_MESSAGE, parse_upload};

use super::test_harness::{service_after, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn upload_view_smoke_renders_form_and_error() {
    let mut service = ExamService::new(fixed_clock());
    let ticket = service.begin_upload("broken.json");
    service.complete_upload(&ticket, parse_upload("{not json"));

    let mut harness = setup_view_harness(service);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Load a question set"), "missing heading in {html}");
    assert!(html.contains("upload-path"), "missing path field in {html}");
    assert!(html.contains("sample.json"), "missing default path in {html}");
    assert!(html.contains(INVALID_UPLOAD_MESSAGE), "missing error in {html}");
    assert!(!html.contains("app-header"), "header shown before load in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn pre_exam_view_smoke_renders_count_and_start() {
    let mut harness = setup_view_harness(service_after(&[]));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Ready to start"), "missing heading in {html}");
    assert!(html.contains("2 questions"), "missing count in {html}");
    assert!(html.contains("Loaded from sample.json"), "missing source in {html}");
    assert!(html.contains("exam-start"), "missing start button in {html}");
    assert!(html.contains("upload-form--compact"), "missing header form in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn pre_exam_view_smoke_flags_empty_set() {
    let mut service = ExamService::new(fixed_clock());
    let ticket = service.begin_upload("empty.json");
    service.complete_upload(&ticket, parse_upload("[]"));

    let mut harness = setup_view_harness(service);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("This file has no questions."), "missing notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn in_progress_view_smoke_renders_current_question() {
    let mut harness = setup_view_harness(service_after(&[
        ExamIntent::Start,
        ExamIntent::Select(1),
    ]));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1 of 2"), "missing progress in {html}");
    assert!(html.contains("1 of 2 answered"), "missing answered count in {html}");
    assert!(html.contains("<strong>2 + 2</strong>"), "prompt not rendered as markdown in {html}");
    assert!(html.contains("choice choice--selected"), "selection not marked in {html}");
    assert!(html.contains("exam-next"), "missing next button in {html}");
    assert!(!html.contains("exam-finish"), "finish shown before last question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn in_progress_view_smoke_offers_finish_on_last_question() {
    let mut harness = setup_view_harness(service_after(&[
        ExamIntent::Start,
        ExamIntent::GoTo(1),
    ]));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 2 of 2"), "missing progress in {html}");
    assert!(html.contains("exam-finish"), "missing finish button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_score_and_review() {
    let mut harness = setup_view_harness(service_after(&[
        ExamIntent::Start,
        ExamIntent::Select(1),
        ExamIntent::Next,
        ExamIntent::Select(1),
        ExamIntent::Finish,
    ]));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("50.0%"), "missing score in {html}");
    assert!(html.contains("score score--low"), "missing band class in {html}");
    assert!(html.contains("1 of 2"), "missing correct count in {html}");
    assert!(html.contains("Correct answer"), "missing correct marker in {html}");
    assert!(html.contains("Your answer"), "missing selection marker in {html}");
    assert!(html.contains("<em>addition</em>"), "missing explanation in {html}");
    assert!(html.contains("exam-restart"), "missing retake button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn upload_view_smoke_is_ready_after_reset_abandons_upload() {
    let mut service = service_after(&[ExamIntent::Start, ExamIntent::Finish]);
    let _ticket = service.begin_upload("slow.json");
    service.dispatch(ExamIntent::Reset).expect("reset applies");

    let mut harness = setup_view_harness(service);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Load a question set"), "missing heading in {html}");
    assert!(!html.contains("Loading..."), "upload still pending in {html}");
}
