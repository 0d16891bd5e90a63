use dioxus::prelude::*;
use scholora_core::model::AnswerOutcome;

use super::footer::ProgressFooter;
use crate::vm::{LessonIntent, LessonPageVm};

/// A content page: header, page body, question box and progress footer.
#[component]
pub fn LessonPageView(vm: LessonPageVm, on_intent: EventHandler<LessonIntent>) -> Element {
    let page_id = format!("lesson-{}", vm.page.slug());

    rsx! {
        div { class: "lesson-page", id: "{page_id}",
            header { class: "lesson-header",
                h1 { class: "paper-title", "{vm.paper_title}" }
                p { class: "paper-authors", "{vm.authors}" }
                if let Some(name) = vm.artifact_name.clone() {
                    p { class: "paper-source", "Walking through: {name}" }
                }
            }

            section { class: "lesson-body",
                h2 { class: "lesson-heading", "{vm.heading}" }

                match vm.acknowledgement {
                    Some(AnswerOutcome::Correct) => rsx! {
                        p { class: "ack-message ack-correct", "Correct!" }
                    },
                    Some(AnswerOutcome::Incorrect) => rsx! {
                        p { class: "ack-message ack-incorrect", "Not quite. Keep going." }
                    },
                    None => rsx! {},
                }

                if let Some(summary) = vm.summary.clone() {
                    p { class: "lesson-summary", "{summary}" }
                }

                if !vm.resources.is_empty() {
                    h3 { "Relevant Resources" }
                    ul { class: "lesson-resources",
                        for url in vm.resources.clone() {
                            ResourceLink { key: "{url}", url: url.clone(), on_intent }
                        }
                    }
                }

                if let Some(embed) = vm.embed_url.clone() {
                    iframe {
                        class: "knowledge-map",
                        src: "{embed}",
                        width: "800",
                        height: "450",
                    }
                }

                if let Some(src) = vm.video.clone() {
                    LessonVideo { src, on_intent }
                }

                if let Some(command) = vm.voice {
                    button {
                        class: "voice-button",
                        r#type: "button",
                        onclick: move |_| on_intent.call(LessonIntent::Voice(command)),
                        "{command.label()}"
                    }
                }

                if let Some(prompt) = vm.question.clone() {
                    QuestionBox {
                        prompt,
                        answer: vm.answer_text.clone(),
                        box_class: vm.question_class(),
                        on_intent,
                    }
                }

                if let Some(summary) = vm.closing_summary.clone() {
                    p { class: "closing-summary", "{summary}" }
                }

                if vm.can_continue {
                    button {
                        id: "lesson-continue",
                        class: "continue-button",
                        r#type: "button",
                        onclick: move |_| on_intent.call(LessonIntent::Continue),
                        "Continue"
                    }
                }
            }

            ProgressFooter { segments: vm.footer.clone() }
        }
    }
}

#[component]
fn ResourceLink(url: String, on_intent: EventHandler<LessonIntent>) -> Element {
    let target = url.clone();
    rsx! {
        li {
            a {
                href: "{url}",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    on_intent.call(LessonIntent::OpenResource(target.clone()));
                },
                "{url}"
            }
        }
    }
}

#[component]
fn LessonVideo(src: String, on_intent: EventHandler<LessonIntent>) -> Element {
    let failed_src = src.clone();
    rsx! {
        video {
            class: "lesson-video",
            src: "{src}",
            autoplay: true,
            controls: true,
            onerror: move |_| on_intent.call(LessonIntent::PlaybackFailed(failed_src.clone())),
        }
    }
}

#[component]
fn QuestionBox(
    prompt: String,
    answer: String,
    box_class: &'static str,
    on_intent: EventHandler<LessonIntent>,
) -> Element {
    rsx! {
        div { class: "{box_class}",
            label { r#for: "lesson-answer", class: "question-prompt", "{prompt}" }
            input {
                id: "lesson-answer",
                r#type: "text",
                placeholder: "Type your answer and press Enter",
                value: "{answer}",
                oninput: move |evt| on_intent.call(LessonIntent::AnswerChanged(evt.value())),
                onkeydown: move |evt| {
                    if evt.data.key() == Key::Enter {
                        evt.prevent_default();
                        on_intent.call(LessonIntent::SubmitAnswer);
                    }
                },
            }
        }
    }
}
