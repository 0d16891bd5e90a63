use std::sync::Arc;

use services::{CatalogService, LessonService, VoiceAssistantClient};

use crate::platform::LinkOpenerRef;

/// Services the UI needs, supplied by the application composition root.
pub trait UiApp: Send + Sync {
    fn lessons(&self) -> Arc<LessonService>;
    fn catalog(&self) -> Arc<CatalogService>;
    fn voice(&self) -> Arc<VoiceAssistantClient>;
    fn link_opener(&self) -> LinkOpenerRef;
}

#[derive(Clone)]
pub struct AppContext {
    lessons: Arc<LessonService>,
    catalog: Arc<CatalogService>,
    voice: Arc<VoiceAssistantClient>,
    link_opener: LinkOpenerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            lessons: app.lessons(),
            catalog: app.catalog(),
            voice: app.voice(),
            link_opener: app.link_opener(),
        }
    }

    #[must_use]
    pub fn lessons(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn voice(&self) -> Arc<VoiceAssistantClient> {
        Arc::clone(&self.voice)
    }

    #[must_use]
    pub fn link_opener(&self) -> LinkOpenerRef {
        Arc::clone(&self.link_opener)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
