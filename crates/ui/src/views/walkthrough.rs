use std::sync::Arc;

use dioxus::prelude::*;
use scholora_core::LessonEvent;
use scholora_core::model::{LessonPage, LessonSession, UploadedFile};
use services::{LessonError, LessonService, Pending};

use super::lesson::LessonPageView;
use super::state::{ViewError, view_state_from_resource};
use super::upload::UploadPage;
use crate::context::AppContext;
use crate::vm::{LessonIntent, map_lesson_page, map_upload};

/// Hosts one walkthrough session and routes every intent through the
/// lesson service.
#[component]
pub fn WalkthroughView() -> Element {
    let ctx = use_context::<AppContext>();
    let lessons = ctx.lessons();
    let plan = lessons.plan();

    let mut session = use_signal({
        let lessons = Arc::clone(&lessons);
        move || lessons.start_session()
    });
    let mut alert = use_signal(|| None::<String>);
    let mut query = use_signal(String::new);

    let catalog = ctx.catalog();
    let search = use_resource(move || {
        let catalog = Arc::clone(&catalog);
        let query = query();
        async move { catalog.search(&query).await.map_err(ViewError::from) }
    });
    let results = view_state_from_resource(&search);

    let dispatch_intent = {
        let voice = ctx.voice();
        let links = ctx.link_opener();
        use_callback(move |intent: LessonIntent| {
            let lessons = Arc::clone(&lessons);
            match intent {
                LessonIntent::PickFile => {
                    spawn(async move {
                        let Some(handle) = rfd::AsyncFileDialog::new()
                            .add_filter("PDF", &["pdf"])
                            .pick_file()
                            .await
                        else {
                            return;
                        };
                        let file = UploadedFile::new(handle.path());
                        match lessons.resolve_file(file).await {
                            Ok(event) => apply(&lessons, session, event),
                            Err(err) => {
                                tracing::warn!(error = %err, "could not use chosen file");
                                alert.set(Some(alert_message(err)));
                            }
                        }
                    });
                }
                LessonIntent::SelectTitle(title) => {
                    spawn(async move {
                        match lessons.resolve_title(&title).await {
                            Ok(event) => apply(&lessons, session, event),
                            Err(err) => {
                                tracing::warn!(error = %err, title = %title, "could not select paper");
                                alert.set(Some(alert_message(err)));
                            }
                        }
                    });
                }
                LessonIntent::SubmitArtifact => {
                    let submitted = lessons.submit_artifact(&mut session.write());
                    match submitted {
                        Ok(pending) => {
                            alert.set(None);
                            schedule(lessons, session, pending);
                        }
                        Err(err) => alert.set(Some(alert_message(err))),
                    }
                }
                LessonIntent::DismissAlert => alert.set(None),
                LessonIntent::AnswerChanged(text) => {
                    lessons.set_answer(&mut session.write(), text);
                }
                LessonIntent::SubmitAnswer => {
                    let pending = lessons.submit_answer(&mut session.write());
                    if let Some(pending) = pending {
                        schedule(lessons, session, pending);
                    }
                }
                LessonIntent::Continue => {
                    lessons.advance(&mut session.write());
                }
                LessonIntent::Voice(command) => {
                    let voice = Arc::clone(&voice);
                    spawn(async move {
                        voice.trigger(command).await;
                    });
                }
                LessonIntent::OpenResource(url) => links.open_url(&url),
                LessonIntent::PlaybackFailed(src) => {
                    tracing::error!(
                        video = %src,
                        page = session.peek().page().slug(),
                        "video playback failed"
                    );
                }
            }
        })
    };

    let current = session.read().clone();

    rsx! {
        div { class: "walkthrough",
            if current.page() == LessonPage::UploadSelect {
                UploadPage {
                    vm: map_upload(&current),
                    query: query(),
                    results,
                    on_search: move |value: String| query.set(value),
                    on_intent: dispatch_intent,
                }
            } else {
                LessonPageView {
                    vm: map_lesson_page(&plan, &current),
                    on_intent: dispatch_intent,
                }
            }

            if let Some(message) = alert() {
                div { class: "alert-overlay",
                    div { class: "alert-box",
                        p { class: "alert-message", "{message}" }
                        button {
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(LessonIntent::DismissAlert),
                            "OK"
                        }
                    }
                }
            }
        }
    }
}

/// Apply a resolved selection to the session as it is now.
fn apply(lessons: &LessonService, mut session: Signal<LessonSession>, event: LessonEvent) {
    if let Err(err) = lessons.dispatch(&mut session.write(), event) {
        tracing::warn!(error = %err, "selection rejected");
    }
}

/// Wait out a timed transition on the UI runtime, then feed it back in.
fn schedule(lessons: Arc<LessonService>, mut session: Signal<LessonSession>, pending: Pending) {
    tracing::debug!(
        delay_ms = pending.delay().as_millis() as u64,
        event = ?pending.event(),
        "timed lesson event scheduled"
    );
    spawn(async move {
        let event = pending.elapsed().await;
        if let Err(err) = lessons.dispatch(&mut session.write(), event) {
            tracing::warn!(error = %err, "timed lesson event rejected");
        }
    });
}

fn alert_message(err: LessonError) -> String {
    match err {
        LessonError::Validation(reason) => reason.to_string(),
        other => ViewError::from(other).message().to_owned(),
    }
}
