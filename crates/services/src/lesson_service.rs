use std::sync::Arc;
use std::time::Duration;

use scholora_core::model::{LessonPage, LessonPlan, LessonSession, UploadedFile};
use scholora_core::{LessonEffect, LessonEvent, reduce};
use storage::artifacts::ArtifactStore;
use storage::catalog::Catalog;

use crate::Clock;
use crate::error::LessonError;

/// Delays used for timed transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LessonTiming {
    /// Simulated upload time between submitting a paper and the first lesson.
    pub processing_delay: Duration,
    /// How long an answer highlight stays on screen.
    pub acknowledgement: Duration,
}

impl LessonTiming {
    pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(2000);
    pub const DEFAULT_ACKNOWLEDGEMENT: Duration = Duration::from_millis(1500);

    #[must_use]
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }
}

impl Default for LessonTiming {
    fn default() -> Self {
        Self {
            processing_delay: Self::DEFAULT_PROCESSING_DELAY,
            acknowledgement: Self::DEFAULT_ACKNOWLEDGEMENT,
        }
    }
}

/// A timed follow-up event.
///
/// The caller waits (usually in a spawned task) and then dispatches the event
/// back through [`LessonService::dispatch`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Pending {
    delay: Duration,
    event: LessonEvent,
}

impl Pending {
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn event(&self) -> &LessonEvent {
        &self.event
    }

    /// Sleep for the delay and hand back the event to dispatch.
    pub async fn elapsed(self) -> LessonEvent {
        tokio::time::sleep(self.delay).await;
        self.event
    }
}

/// Controller for a walkthrough session.
///
/// Owns the lesson plan and storage adapters; the session itself is held by
/// the caller and only changed through `dispatch` and the helpers built on it.
#[derive(Clone)]
pub struct LessonService {
    clock: Clock,
    plan: Arc<LessonPlan>,
    catalog: Arc<dyn Catalog>,
    artifacts: Arc<dyn ArtifactStore>,
    timing: LessonTiming,
}

impl LessonService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<dyn Catalog>, artifacts: Arc<dyn ArtifactStore>) -> Self {
        Self {
            clock,
            plan: Arc::new(LessonPlan::default()),
            catalog,
            artifacts,
            timing: LessonTiming::default(),
        }
    }

    #[must_use]
    pub fn with_timing(mut self, timing: LessonTiming) -> Self {
        self.timing = timing;
        self
    }

    #[must_use]
    pub fn plan(&self) -> Arc<LessonPlan> {
        Arc::clone(&self.plan)
    }

    #[must_use]
    pub fn timing(&self) -> LessonTiming {
        self.timing
    }

    #[must_use]
    pub fn start_session(&self) -> LessonSession {
        LessonSession::new(self.clock.now())
    }

    /// Apply one event to the session.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::Validation` when the event was rejected. The
    /// session is unchanged in that case.
    pub fn dispatch(
        &self,
        session: &mut LessonSession,
        event: LessonEvent,
    ) -> Result<Option<Pending>, LessonError> {
        let before = session.page();
        let update = reduce(&self.plan, session.clone(), event);
        *session = update.session;

        let after = session.page();
        if after != before {
            tracing::info!(
                from = before.slug(),
                to = after.slug(),
                progress = session.progress().value(),
                "lesson page changed"
            );
            if session.progress().is_complete() {
                let summary = session.summary();
                tracing::info!(
                    elapsed_secs = self.clock.since(session.started_at()).num_seconds(),
                    answered = summary.answered,
                    correct = summary.correct,
                    "walkthrough completed"
                );
            }
        }

        match update.effect {
            None => Ok(None),
            Some(LessonEffect::ScheduleProcessing) => Ok(Some(Pending {
                delay: self.timing.processing_delay,
                event: LessonEvent::ProcessingFinished,
            })),
            Some(LessonEffect::ScheduleAcknowledgement { outcome, answer }) => {
                tracing::debug!(?outcome, answer, page = before.slug(), "answer checked");
                Ok(Some(Pending {
                    delay: self.timing.acknowledgement,
                    event: LessonEvent::AcknowledgementElapsed { answer },
                }))
            }
            Some(LessonEffect::Alert(err)) => {
                tracing::debug!(%err, "submission rejected");
                Err(err.into())
            }
        }
    }

    /// Look up a catalog title's bundled asset without touching any session.
    ///
    /// Dispatch the returned event once it resolves, against the session as it
    /// is then.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::Storage` if the title is unknown to the catalog.
    pub async fn resolve_title(&self, title: &str) -> Result<LessonEvent, LessonError> {
        let reference = self.catalog.asset_for(title).await?;
        Ok(LessonEvent::TitleSelected {
            title: title.to_owned(),
            reference,
        })
    }

    /// Store an uploaded file and return the event that selects it.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::Storage` if the file cannot be referenced.
    pub async fn resolve_file(&self, file: UploadedFile) -> Result<LessonEvent, LessonError> {
        let reference = self.artifacts.store_upload(&file).await?;
        Ok(LessonEvent::FileChosen { file, reference })
    }

    /// Select a catalog title, resolving its bundled asset.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::Storage` if the title is unknown to the catalog.
    pub async fn select_title(
        &self,
        session: &mut LessonSession,
        title: &str,
    ) -> Result<(), LessonError> {
        let event = self.resolve_title(title).await?;
        self.dispatch(session, event)?;
        Ok(())
    }

    /// Select a file from disk.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::Storage` if the file cannot be referenced.
    pub async fn select_file(
        &self,
        session: &mut LessonSession,
        file: UploadedFile,
    ) -> Result<(), LessonError> {
        let event = self.resolve_file(file).await?;
        self.dispatch(session, event)?;
        Ok(())
    }

    pub fn set_answer(&self, session: &mut LessonSession, text: impl Into<String>) {
        // Answer edits never produce effects.
        let _ = self.dispatch(session, LessonEvent::AnswerChanged(text.into()));
    }

    /// Submit the selected paper. Dispatch the returned event once it elapses.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::Validation` if no paper is selected or one was
    /// already submitted.
    pub fn submit_artifact(&self, session: &mut LessonSession) -> Result<Pending, LessonError> {
        let pending = self.dispatch(session, LessonEvent::SubmitArtifact)?;
        Ok(pending.unwrap_or(Pending {
            delay: Duration::ZERO,
            event: LessonEvent::ProcessingFinished,
        }))
    }

    /// Submit, wait out the processing delay, and open the first lesson.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::Validation` if the submission is rejected.
    pub async fn submit_and_wait(
        &self,
        session: &mut LessonSession,
    ) -> Result<LessonPage, LessonError> {
        let pending = self.submit_artifact(session)?;
        let event = pending.elapsed().await;
        self.dispatch(session, event)?;
        Ok(session.page())
    }

    /// Check the typed answer (the Enter key).
    ///
    /// Returns `None` when the input was blank or the page has no question.
    pub fn submit_answer(&self, session: &mut LessonSession) -> Option<Pending> {
        let answered_at = self.clock.now();
        self.dispatch(session, LessonEvent::SubmitAnswer { answered_at })
            .ok()
            .flatten()
    }

    pub fn advance(&self, session: &mut LessonSession) -> LessonPage {
        let _ = self.dispatch(session, LessonEvent::Advance);
        session.page()
    }
}
