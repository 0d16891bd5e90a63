#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod error;
pub mod lesson_service;
pub mod voice_assistant;

pub use scholora_core::Clock;

pub use app_services::AppServices;
pub use catalog_service::CatalogService;
pub use error::{LessonError, VoiceAssistantError};
pub use lesson_service::{LessonService, LessonTiming, Pending};
pub use voice_assistant::{VoiceAssistantClient, VoiceAssistantConfig};
