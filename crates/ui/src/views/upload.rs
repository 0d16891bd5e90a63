use dioxus::prelude::*;

use super::state::ViewState;
use crate::vm::{LessonIntent, UploadVm};

#[component]
pub fn UploadPage(
    vm: UploadVm,
    query: String,
    results: ViewState<Vec<String>>,
    on_search: EventHandler<String>,
    on_intent: EventHandler<LessonIntent>,
) -> Element {
    rsx! {
        div { class: "upload-page",
            h1 { class: "brand", "scholora.ai" }

            div { class: "upload-panels",
                form {
                    class: "upload-card",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        on_intent.call(LessonIntent::SubmitArtifact);
                    },
                    h2 { "Upload PDF File" }
                    button {
                        class: "choose-file",
                        r#type: "button",
                        disabled: vm.processing,
                        onclick: move |_| on_intent.call(LessonIntent::PickFile),
                        "Choose File"
                    }
                    p { class: "chosen-file",
                        match vm.uploaded_name.clone() {
                            Some(name) => rsx! { "{name}" },
                            None => rsx! { "No file chosen" },
                        }
                    }
                    button {
                        id: "upload-submit",
                        class: "upload-submit",
                        r#type: "submit",
                        disabled: vm.processing,
                        if vm.processing {
                            span { class: "spinner" }
                        } else {
                            "Upload"
                        }
                    }
                }

                div { class: "search-card",
                    h2 { "Search for Papers" }
                    input {
                        id: "paper-search",
                        r#type: "text",
                        placeholder: "Type to search...",
                        value: "{query}",
                        disabled: vm.processing,
                        oninput: move |evt| on_search.call(evt.value()),
                    }
                    if !query.trim().is_empty() {
                        SearchResults { results, on_intent }
                    }
                }
            }

            if let Some(name) = vm.selected_name.clone() {
                div { class: "preview-card",
                    h2 { "File Preview:" }
                    p { class: "preview-name", "{name}" }
                    if let Some(src) = vm.preview.clone() {
                        embed {
                            src: "{src}",
                            r#type: "application/pdf",
                            width: "100%",
                            height: "500px",
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SearchResults(results: ViewState<Vec<String>>, on_intent: EventHandler<LessonIntent>) -> Element {
    match results {
        ViewState::Idle => rsx! {},
        ViewState::Loading => rsx! { p { class: "search-status", "Searching..." } },
        ViewState::Error(err) => rsx! { p { class: "search-status", "{err.message()}" } },
        ViewState::Ready(titles) if titles.is_empty() => rsx! {
            p { class: "search-status", "No matching papers." }
        },
        ViewState::Ready(titles) => rsx! {
            ul { class: "search-results",
                for title in titles {
                    SearchResult { key: "{title}", title: title.clone(), on_intent }
                }
            }
        },
    }
}

#[component]
fn SearchResult(title: String, on_intent: EventHandler<LessonIntent>) -> Element {
    let selected = title.clone();
    rsx! {
        li {
            class: "search-result",
            onclick: move |_| on_intent.call(LessonIntent::SelectTitle(selected.clone())),
            "{title}"
        }
    }
}
