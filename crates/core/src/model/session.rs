use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{AnswerOutcome, Artifact, ArtifactRef, LessonPage, LessonPlan, Progress, UploadedFile};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("Please select a file to upload or choose a paper from the search.")]
    MissingArtifact,

    #[error("a paper has already been submitted")]
    AlreadySubmitted,
}

/// One accepted answer, kept for the closing summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub page: LessonPage,
    pub outcome: AnswerOutcome,
    pub answered_at: DateTime<Utc>,
}

/// Correct-answer tally for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnswerSummary {
    pub answered: usize,
    pub correct: usize,
}

impl AnswerSummary {
    #[must_use]
    pub fn from_records(records: &[AnswerRecord]) -> Self {
        Self {
            answered: records.len(),
            correct: records.iter().filter(|r| r.outcome.is_correct()).count(),
        }
    }
}

/// State of a single walkthrough.
///
/// Fields are private: the only way to change a session is through the
/// operations below, which keep `page()` derived from `progress()` and never
/// let progress move backwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonSession {
    progress: Progress,
    answer_text: String,
    artifact: Option<Artifact>,
    processing: bool,
    acknowledgement: Option<AnswerOutcome>,
    answers: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
}

impl LessonSession {
    #[must_use]
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            progress: Progress::START,
            answer_text: String::new(),
            artifact: None,
            processing: false,
            acknowledgement: None,
            answers: Vec::new(),
            started_at,
        }
    }

    #[must_use]
    pub fn page(&self) -> LessonPage {
        self.progress.page()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    #[must_use]
    pub fn answer_text(&self) -> &str {
        &self.answer_text
    }

    #[must_use]
    pub fn artifact(&self) -> Option<&Artifact> {
        self.artifact.as_ref()
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    #[must_use]
    pub fn acknowledgement(&self) -> Option<AnswerOutcome> {
        self.acknowledgement
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn summary(&self) -> AnswerSummary {
        AnswerSummary::from_records(&self.answers)
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    fn accepts_selection(&self) -> bool {
        self.page() == LessonPage::UploadSelect && !self.processing
    }

    /// Select a file from disk, replacing any earlier selection.
    ///
    /// Returns `false` (and changes nothing) once a paper has been submitted.
    pub fn select_file(&mut self, file: UploadedFile, reference: ArtifactRef) -> bool {
        if !self.accepts_selection() {
            return false;
        }
        self.artifact = Some(Artifact::Upload { file, reference });
        true
    }

    /// Select a catalog title, replacing any earlier selection.
    ///
    /// Returns `false` (and changes nothing) once a paper has been submitted.
    pub fn select_title(&mut self, title: impl Into<String>, reference: Option<ArtifactRef>) -> bool {
        if !self.accepts_selection() {
            return false;
        }
        self.artifact = Some(Artifact::Catalog {
            title: title.into(),
            reference,
        });
        true
    }

    pub fn set_answer_text(&mut self, text: impl Into<String>) {
        self.answer_text = text.into();
    }

    /// Begin processing the selected paper.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingArtifact` if nothing is selected and
    /// `ValidationError::AlreadySubmitted` if a submission is pending or done.
    /// The session is unchanged on error.
    pub fn submit_artifact(&mut self) -> Result<(), ValidationError> {
        if !self.accepts_selection() {
            return Err(ValidationError::AlreadySubmitted);
        }
        if self.artifact.is_none() {
            return Err(ValidationError::MissingArtifact);
        }
        self.processing = true;
        Ok(())
    }

    /// Finish a pending submission and open the first lesson page.
    ///
    /// Does nothing unless a submission is pending.
    pub fn finish_processing(&mut self) -> LessonPage {
        if self.processing {
            self.processing = false;
            self.progress = self.progress.max(Progress::FIRST_LESSON);
        }
        self.page()
    }

    /// Move to the next page.
    ///
    /// No-op on the upload page and on the terminal page.
    pub fn advance(&mut self) -> LessonPage {
        let page = self.page();
        if page.is_content() && !page.is_terminal() {
            self.progress = self.progress.stepped();
        }
        self.page()
    }

    /// Grade `text` against the question on the current page, then move on.
    ///
    /// Blank input, the upload page, and pages without a question are ignored
    /// and return `None`. Otherwise the outcome is recorded and acknowledged,
    /// the answer field is cleared, and the session advances whether or not
    /// the answer was correct.
    pub fn check_answer(
        &mut self,
        plan: &LessonPlan,
        text: &str,
        answered_at: DateTime<Utc>,
    ) -> Option<AnswerOutcome> {
        if text.trim().is_empty() {
            return None;
        }
        let page = self.page();
        if !page.is_content() {
            return None;
        }
        let outcome = plan.question_on(page)?.grade(text);

        self.answers.push(AnswerRecord {
            page,
            outcome,
            answered_at,
        });
        self.acknowledgement = Some(outcome);
        self.answer_text.clear();
        self.advance();
        Some(outcome)
    }

    /// Number of accepted answers; identifies the acknowledgement currently shown.
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Clear the acknowledgement raised by answer number `answer`.
    ///
    /// A later answer has already replaced it when the counts differ, so the
    /// stale timer leaves the newer highlight alone.
    pub fn dismiss_acknowledgement(&mut self, answer: usize) {
        if self.answers.len() == answer {
            self.acknowledgement = None;
        }
    }
}
