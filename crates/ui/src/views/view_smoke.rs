use scholora_core::model::{
    AnswerOutcome, ArtifactRef, LessonPlan, LessonSession, UploadedFile,
};
use scholora_core::time::fixed_now;
use scholora_core::{LessonEvent, reduce};

use super::state::{ViewError, ViewState};
use super::test_harness::{setup_lesson_harness, setup_upload_harness, setup_walkthrough_harness};
use crate::vm::{UploadVm, map_lesson_page, map_upload};

fn session_after(
    plan: &LessonPlan,
    session: LessonSession,
    events: Vec<LessonEvent>,
) -> LessonSession {
    events
        .into_iter()
        .fold(session, |session, event| reduce(plan, session, event).session)
}

fn started(plan: &LessonPlan, advances: usize) -> LessonSession {
    let mut events = vec![
        LessonEvent::TitleSelected {
            title: "Attention Is All You Need".into(),
            reference: Some(ArtifactRef::new("/attention.pdf")),
        },
        LessonEvent::SubmitArtifact,
        LessonEvent::ProcessingFinished,
    ];
    events.extend(std::iter::repeat_n(LessonEvent::Advance, advances));
    session_after(plan, LessonSession::new(fixed_now()), events)
}

#[tokio::test(flavor = "current_thread")]
async fn walkthrough_view_smoke_opens_on_upload_page() {
    let mut harness = setup_walkthrough_harness();
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("scholora.ai"), "missing brand in {html}");
    assert!(html.contains("Upload PDF File"), "missing upload card in {html}");
    assert!(html.contains("Search for Papers"), "missing search card in {html}");
    assert!(!html.contains("progress-footer"), "footer shown too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn upload_page_smoke_renders_results_and_preview() {
    let mut session = LessonSession::new(fixed_now());
    session.select_file(
        UploadedFile::new("/tmp/notes.pdf"),
        ArtifactRef::new("file:///tmp/notes.pdf"),
    );
    let mut harness = setup_upload_harness(
        map_upload(&session),
        "bert",
        ViewState::Ready(vec![
            "BERT: Pre-training of Deep Bidirectional Transformers for Language Understanding"
                .to_owned(),
        ]),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("BERT: Pre-training"), "missing result in {html}");
    assert!(html.contains("File Preview:"), "missing preview in {html}");
    assert!(html.contains("file:///tmp/notes.pdf"), "missing preview source in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn upload_page_smoke_shows_spinner_while_processing() {
    let vm = UploadVm {
        processing: true,
        ..UploadVm::default()
    };
    let mut harness = setup_upload_harness(vm, "", ViewState::Idle);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("spinner"), "missing spinner in {html}");
    assert!(html.contains("No file chosen"), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn upload_page_smoke_reports_search_errors() {
    let mut harness = setup_upload_harness(
        UploadVm::default(),
        "gpt",
        ViewState::Error(ViewError::Unavailable),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains(ViewError::Unavailable.message()),
        "missing error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn prerequisites_page_smoke_renders_resources_and_footer() {
    let plan = LessonPlan::transformer();
    let mut harness = setup_lesson_harness(map_lesson_page(&plan, &started(&plan, 0)));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Attention is All You Need"), "missing header in {html}");
    assert!(html.contains("Vaswani et al."), "missing authors in {html}");
    assert!(html.contains("Relevant Resources"), "missing resources in {html}");
    assert!(html.contains("lesson-answer"), "missing answer input in {html}");
    assert_eq!(html.matches("footer-segment lit").count(), 1, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn knowledge_map_page_smoke_embeds_the_map() {
    let plan = LessonPlan::transformer();
    let mut harness = setup_lesson_harness(map_lesson_page(&plan, &started(&plan, 1)));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("whimsical.com/embed"), "missing embed in {html}");
    assert!(html.contains("process input sequences"), "missing question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn attention_page_smoke_shows_video_voice_and_acknowledgement() {
    let plan = LessonPlan::transformer();
    let session = session_after(
        &plan,
        started(&plan, 1),
        vec![
            LessonEvent::AnswerChanged("Self-Attention".into()),
            LessonEvent::SubmitAnswer {
                answered_at: fixed_now(),
            },
        ],
    );
    assert_eq!(session.acknowledgement(), Some(AnswerOutcome::Correct));

    let mut harness = setup_lesson_harness(map_lesson_page(&plan, &session));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("/videos/tokens.mp4"), "missing video in {html}");
    assert!(html.contains("Start Voicebot"), "missing voice button in {html}");
    assert!(html.contains("ack-correct"), "missing acknowledgement in {html}");
    assert_eq!(html.matches("footer-segment lit").count(), 3, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn embeddings_page_smoke_shows_summary_and_stop() {
    let plan = LessonPlan::transformer();
    let mut harness = setup_lesson_harness(map_lesson_page(&plan, &started(&plan, 4)));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Stop Voicebot"), "missing stop button in {html}");
    assert!(html.contains("questions correctly"), "missing summary in {html}");
    assert!(!html.contains("lesson-continue"), "terminal page offers continue: {html}");
    assert_eq!(html.matches("footer-segment lit").count(), 5, "{html}");
}
