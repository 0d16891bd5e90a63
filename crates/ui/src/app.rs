use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;

/// Root component: global stylesheet, window title and the router.
#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Scholora" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "The walkthrough stopped unexpectedly" }
                        p { "Restart Scholora to begin a new session." }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
