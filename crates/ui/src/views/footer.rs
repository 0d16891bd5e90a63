use dioxus::prelude::*;

use crate::vm::FooterSegmentVm;

#[component]
pub fn ProgressFooter(segments: Vec<FooterSegmentVm>) -> Element {
    rsx! {
        footer { class: "progress-footer",
            for segment in segments {
                div {
                    key: "{segment.label}",
                    class: if segment.lit { "footer-segment lit" } else { "footer-segment" },
                    span { class: "footer-label", "{segment.label}" }
                }
            }
        }
    }
}
