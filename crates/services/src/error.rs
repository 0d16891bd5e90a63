//! Shared error types for the services crate.

use thiserror::Error;

use scholora_core::model::ValidationError;
use storage::StorageError;

/// Errors emitted by `VoiceAssistantClient`.
///
/// Callers on the UI path log these and carry on; they never reach the user.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VoiceAssistantError {
    #[error("voice assistant request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `LessonService` and `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
