use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use scholora_core::time::fixed_clock;
use services::{
    AppServices, CatalogService, LessonService, LessonTiming, VoiceAssistantClient,
    VoiceAssistantConfig,
};

use crate::context::{UiApp, build_app_context};
use crate::platform::{LinkOpenerRef, UiLinkOpener};
use crate::views::{LessonPageView, UploadPage, ViewState, WalkthroughView};
use crate::vm::{LessonPageVm, UploadVm};

struct NoopLinkOpener;

impl UiLinkOpener for NoopLinkOpener {
    fn open_url(&self, _url: &str) {}
}

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn lessons(&self) -> Arc<LessonService> {
        self.services.lessons()
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn voice(&self) -> Arc<VoiceAssistantClient> {
        self.services.voice()
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::new(NoopLinkOpener)
    }
}

#[derive(Props, Clone)]
struct WalkthroughHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for WalkthroughHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn WalkthroughHarness(props: WalkthroughHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { WalkthroughView {} }
}

#[derive(Props, Clone, PartialEq)]
struct LessonHarnessProps {
    vm: LessonPageVm,
}

#[component]
fn LessonHarness(props: LessonHarnessProps) -> Element {
    rsx! {
        LessonPageView { vm: props.vm.clone(), on_intent: move |_| {} }
    }
}

#[derive(Props, Clone, PartialEq)]
struct UploadHarnessProps {
    vm: UploadVm,
    query: String,
    results: ViewState<Vec<String>>,
}

#[component]
fn UploadHarness(props: UploadHarnessProps) -> Element {
    rsx! {
        UploadPage {
            vm: props.vm.clone(),
            query: props.query.clone(),
            results: props.results.clone(),
            on_search: move |_| {},
            on_intent: move |_| {},
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
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

pub fn setup_walkthrough_harness() -> ViewHarness {
    let services = AppServices::in_memory(
        fixed_clock(),
        LessonTiming::default(),
        VoiceAssistantConfig::default(),
    );
    let dom = VirtualDom::new_with_props(
        WalkthroughHarness,
        WalkthroughHarnessProps {
            app: Arc::new(TestApp { services }),
        },
    );
    ViewHarness { dom }
}

pub fn setup_lesson_harness(vm: LessonPageVm) -> ViewHarness {
    let dom = VirtualDom::new_with_props(LessonHarness, LessonHarnessProps { vm });
    ViewHarness { dom }
}

pub fn setup_upload_harness(
    vm: UploadVm,
    query: &str,
    results: ViewState<Vec<String>>,
) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        UploadHarness,
        UploadHarnessProps {
            vm,
            query: query.to_owned(),
            results,
        },
    );
    ViewHarness { dom }
}
