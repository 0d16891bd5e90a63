use std::sync::Arc;

use storage::Storage;

use crate::Clock;
use crate::catalog_service::CatalogService;
use crate::lesson_service::{LessonService, LessonTiming};
use crate::voice_assistant::{VoiceAssistantClient, VoiceAssistantConfig};

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    lessons: Arc<LessonService>,
    catalog: Arc<CatalogService>,
    voice: Arc<VoiceAssistantClient>,
}

impl AppServices {
    /// Build services backed by in-memory storage.
    #[must_use]
    pub fn in_memory(clock: Clock, timing: LessonTiming, voice: VoiceAssistantConfig) -> Self {
        Self::new(Storage::in_memory(), clock, timing, voice)
    }

    #[must_use]
    pub fn new(
        storage: Storage,
        clock: Clock,
        timing: LessonTiming,
        voice: VoiceAssistantConfig,
    ) -> Self {
        let lessons = Arc::new(
            LessonService::new(
                clock,
                Arc::clone(&storage.catalog),
                Arc::clone(&storage.artifacts),
            )
            .with_timing(timing),
        );
        let catalog = Arc::new(CatalogService::new(Arc::clone(&storage.catalog)));
        let voice = Arc::new(VoiceAssistantClient::new(voice));

        Self {
            lessons,
            catalog,
            voice,
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
}
